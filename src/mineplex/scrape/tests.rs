//! Unit tests for the leaderboard scraper

use super::*;

const SAMPLE_PAGE: &str = "<table><tr><td>IGN</td><td>Wins</td></tr>\
<tr><td>1</td><td>Alice</td><td>500</td></tr></table>";

/// A page shaped like the live one: `count` rows under a header.
fn page_with_rows(count: usize) -> String {
    let mut html = String::from(
        "<html><body><h1>Leaderboard</h1><table>\n<tr><th>#</th><th>IGN</th><th>Wins</th></tr>\n",
    );
    for i in 1..=count {
        html.push_str(&format!(
            "<tr><td>{}</td><td>Player{}</td><td>{}</td></tr>\n",
            i,
            i,
            (count - i + 1) * 1000
        ));
    }
    html.push_str("</table></body></html>");
    html
}

#[cfg(test)]
mod text_tests {
    use super::*;

    #[test]
    fn test_tag_stripper_replaces_tags_with_spaces() {
        let text = TagStripper.extract_text("<b>Alice</b><i>500</i>");
        assert_eq!(text, " Alice  500 ");
    }

    #[test]
    fn test_tag_stripper_keeps_text_without_tags() {
        let text = TagStripper.extract_text("1 Alice 500");
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "1 Alice 500");
    }

    #[test]
    fn test_tag_stripper_handles_attributes() {
        let text = TagStripper.extract_text("<td class=\"name\" id='x'>Bob</td>");
        assert_eq!(tokenize(&text), vec!["Bob"]);
    }

    #[test]
    fn test_tokenize_drops_blank_tokens() {
        assert_eq!(tokenize("  1   Alice \n 500  "), vec!["1", "Alice", "500"]);
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_skip_header_starts_after_first_marker() {
        let tokens = vec!["IGN", "Wins", "1", "Alice", "Wins"];
        assert_eq!(skip_header(&tokens), &["1", "Alice", "Wins"]);
    }

    #[test]
    fn test_skip_header_without_marker_skips_nothing() {
        let tokens = vec!["1", "Alice", "500"];
        assert_eq!(skip_header(&tokens), &["1", "Alice", "500"]);
    }

    #[test]
    fn test_data_tokens_filters_noise_after_header() {
        let tokens = data_tokens("# IGN Wins 1 Alice 500 IGN 2 Bob 400");
        assert_eq!(tokens, vec!["1", "Alice", "500", "2", "Bob", "400"]);
    }

    #[test]
    fn test_data_tokens_window_is_bounded() {
        let html = page_with_rows(60);
        let text = TagStripper.extract_text(&html);
        assert_eq!(data_tokens(&text).len(), WINDOW_SIZE);
    }
}

#[cfg(test)]
mod entry_tests {
    use super::*;

    #[test]
    fn test_parse_entry_strips_thousands_separators() {
        let entry = parse_entry(&["1", "PlayerOne", "1,234"]).unwrap();
        assert_eq!(entry.rank(), 1);
        assert_eq!(entry.name(), "PlayerOne");
        assert_eq!(entry.score(), 1234);

        let entry = parse_entry(&["7", "Big", "12,345,678"]).unwrap();
        assert_eq!(entry.score(), 12_345_678);
    }

    #[test]
    fn test_parse_entry_rejects_non_numeric_fields() {
        assert!(parse_entry(&["one", "Alice", "500"]).is_none());
        assert!(parse_entry(&["1", "Alice", "lots"]).is_none());
    }

    #[test]
    fn test_parse_entry_rejects_signed_numbers() {
        assert!(parse_entry(&["+1", "Alice", "500"]).is_none());
        assert!(parse_entry(&["1", "Alice", "+5"]).is_none());
        assert!(parse_entry(&["1", "Alice", "+1,000"]).is_none());
        assert!(scrape("Wins", "Wins +1 Alice +5").is_none());
    }

    #[test]
    fn test_parse_entry_requires_three_fields() {
        assert!(parse_entry(&["1", "Alice"]).is_none());
        assert!(parse_entry(&[]).is_none());
    }

    #[test]
    fn test_parse_entries_too_short() {
        assert!(parse_entries(&[]).is_none());
        assert!(parse_entries(&["1", "Alice"]).is_none());
    }

    #[test]
    fn test_parse_entries_incomplete_trailing_group() {
        assert!(parse_entries(&["1", "Alice", "500", "2", "Bob"]).is_none());
    }
}

#[cfg(test)]
mod scrape_tests {
    use super::*;

    #[test]
    fn test_scrape_sample_table() {
        let lb = scrape("Wins", SAMPLE_PAGE).unwrap();

        assert_eq!(lb.title(), "Wins");
        assert_eq!(lb.len(), 1);
        assert_eq!(lb.entries()[0], LeaderboardEntry::new(1, "Alice", 500));
    }

    #[test]
    fn test_scrape_single_record_with_separator() {
        let lb = scrape("Kills", "<p>IGN</p><p>Wins</p> 1 PlayerOne 1,234").unwrap();

        let entry = lb.get("PlayerOne").unwrap();
        assert_eq!(entry.rank(), 1);
        assert_eq!(entry.score(), 1234);
    }

    #[test]
    fn test_scrape_too_few_tokens() {
        assert!(scrape("Wins", "<td>Wins</td><td>1</td><td>Alice</td>").is_none());
        assert!(scrape("Wins", "").is_none());
        assert!(scrape("Wins", "<html><body>Not Found</body></html>").is_none());
    }

    #[test]
    fn test_scrape_one_bad_score_rejects_whole_page() {
        let html = "<td>Wins</td>\
            <td>1</td><td>Alice</td><td>500</td>\
            <td>2</td><td>Bob</td><td>n/a</td>\
            <td>3</td><td>Carol</td><td>300</td>";
        assert!(scrape("Wins", html).is_none());
    }

    #[test]
    fn test_scrape_without_header_scans_from_start() {
        let lb = scrape("Wins", "<td>1</td><td>Alice</td><td>500</td>").unwrap();
        assert_eq!(lb.len(), 1);
        assert_eq!(lb.entries()[0].name(), "Alice");
    }

    #[test]
    fn test_scrape_full_page_keeps_top_fifty() {
        let lb = scrape("Wins", &page_with_rows(75)).unwrap();

        assert_eq!(lb.len(), MAX_ENTRIES);
        let first = &lb.entries()[0];
        assert_eq!((first.rank(), first.name(), first.score()), (1, "Player1", 75_000));
        let last = lb.entries().last().unwrap();
        assert_eq!(last.rank(), 50);
    }

    #[test]
    fn test_scrape_partial_page() {
        let lb = scrape("Wins", &page_with_rows(12)).unwrap();
        assert_eq!(lb.len(), 12);
        let ranks: Vec<u32> = lb.iter().map(|e| e.rank()).collect();
        assert_eq!(ranks, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_scrape_drops_duplicate_names() {
        let html = "<td>Wins</td> 1 Alice 500 2 Alice 400 3 Bob 300";
        let lb = scrape("Wins", html).unwrap();

        assert_eq!(lb.len(), 2);
        assert_eq!(lb.get("Alice").unwrap().rank(), 1);
    }

    #[test]
    fn test_scraper_with_custom_extractor() {
        struct PipeSeparated;

        impl TextExtractor for PipeSeparated {
            fn extract_text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
                Cow::Owned(raw.replace('|', " "))
            }
        }

        let scraper = Scraper::with_extractor(PipeSeparated);
        let lb = scraper.scrape("Wins", "IGN|Wins|1|Alice|500").unwrap();
        assert_eq!(lb.entries()[0], LeaderboardEntry::new(1, "Alice", 500));
    }
}
