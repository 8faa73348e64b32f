pub const SELECT_ERROR_DAYS: &str = r#"
            SELECT date(error_requests.day) AS day,
            error_requests.errors AS errors,
            total_requests.requests AS requests
            FROM error_requests
            JOIN total_requests ON error_requests.day = total_requests.day
            WHERE error_requests.errors * 100 > total_requests.requests
            ORDER BY day ASC
            "#;
