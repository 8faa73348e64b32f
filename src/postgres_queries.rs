pub const SELECT_ERROR_DAYS: &str = r#"
            SELECT error_requests.day::date AS day,
            error_requests.errors::int8 AS errors,
            total_requests.requests::int8 AS requests
            FROM error_requests
            JOIN total_requests ON error_requests.day = total_requests.day
            WHERE error_requests.errors * 100 > total_requests.requests
            ORDER BY day ASC
            "#;
