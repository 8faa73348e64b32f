// Most viewed articles of all time
pub const SELECT_TOP_ARTICLES_QUERY: &str = "
            SELECT title, CAST(views AS BIGINT) AS views
            FROM title_name_id_views
            ORDER BY views DESC
            LIMIT 3";

// Authors by the views of all their articles
pub const SELECT_TOP_AUTHORS_QUERY: &str = "
            SELECT name, CAST(SUM(views) AS BIGINT) AS views
            FROM title_name_id_views
            GROUP BY name
            ORDER BY views DESC";
