use chrono::NaiveDate;

const NAME_WIDTH: usize = 35;
const VIEWS_WIDTH: usize = 10;
const PERCENT_WIDTH: usize = 8;

/// Header line plus a dash rule of the same length
pub fn section_header(title: &str) -> String {
    let header = format!(" {title}");
    let rule = "-".repeat(header.chars().count());
    format!("\n{header}\n{rule}")
}

pub fn ranked_views(rank: usize, name: &str, views: i64) -> String {
    format!(
        "\t{rank}. {name:<name_width$} {views:>views_width$} views",
        name_width = NAME_WIDTH,
        views_width = VIEWS_WIDTH,
    )
}

pub fn ranked_error_day(rank: usize, day: NaiveDate, ratio: f64) -> String {
    let day = day.format("%B %d, %Y").to_string();
    let percent = ratio * 100.0;
    format!(
        "\t{rank}. {day:<name_width$} {percent:>percent_width$.2}% errors",
        name_width = NAME_WIDTH,
        percent_width = PERCENT_WIDTH,
    )
}

pub fn no_error_days() -> String {
    "\tNo day had more than 1% of requests lead to an error.".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_rule_matches_header_length() {
        let header = section_header("Most Popular Authors of All Time:");
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], " Most Popular Authors of All Time:");
        assert_eq!(lines[2], "-".repeat(lines[1].len()));
    }

    #[test]
    fn ranked_views_pads_name_and_aligns_views() {
        assert_eq!(
            ranked_views(1, "A", 600000),
            format!("\t1. A{} {:>10} views", " ".repeat(34), 600000)
        );
    }

    #[test]
    fn long_names_are_not_truncated() {
        let name = "Candidate is jerk, alleges rival and his supporters";
        let line = ranked_views(2, name, 338647);
        assert!(line.contains(name));
        assert!(line.ends_with("    338647 views"));
    }

    #[test]
    fn error_day_renders_month_name_and_percentage() {
        let day = NaiveDate::from_ymd_opt(2016, 6, 29).unwrap();
        let line = ranked_error_day(1, day, 0.0233);
        assert!(line.starts_with("\t1. June 29, 2016"));
        assert!(line.ends_with("    2.33% errors"));
    }

    #[test]
    fn error_day_keeps_leading_zero_on_day_of_month() {
        let day = NaiveDate::from_ymd_opt(2016, 7, 1).unwrap();
        assert!(ranked_error_day(1, day, 0.5).contains("July 01, 2016"));
    }
}
