// src/cli/bookmark_commands.rs
use crate::cli::display::{write_bookmarks, write_bookmarks_as_json};
use crate::cli::error::{CliError, CliResult};
use crate::domain::bookmark::{BookmarkBuilder, BookmarkUpdate};
use crate::domain::error::DomainError;
use crate::domain::repositories::repository::BookmarkRepository;
use crate::domain::tag::Tag;
use std::io::Write;
use tracing::{info, instrument};

/// The `ls` separator must be exactly one character
pub fn parse_separator(separator: &str) -> CliResult<char> {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CliError::InvalidInput(format!(
            "separator must be exactly one character, got {} characters",
            separator.chars().count()
        ))),
    }
}

/// Maps the `--archive` / `--unarchive` pair onto an optional archived value
pub fn archived_flag(archive: bool, unarchive: bool) -> Option<bool> {
    match (archive, unarchive) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

#[instrument(skip(repo))]
pub fn add(
    repo: &mut dyn BookmarkRepository,
    name: &str,
    url: &str,
    tags: &[String],
    archived: bool,
) -> CliResult<()> {
    let bookmark = BookmarkBuilder::default()
        .name(name)
        .url(url)
        .tags(Tag::parse_tags(tags)?)
        .archived(archived)
        .build()
        .map_err(DomainError::from)?;

    repo.add(&bookmark)?;
    info!("Added bookmark: {}", bookmark);
    Ok(())
}

#[instrument(skip(repo))]
pub fn delete(repo: &mut dyn BookmarkRepository, name: &str) -> CliResult<()> {
    repo.delete(name)?;
    info!("Deleted bookmark: {}", name);
    Ok(())
}

#[instrument(skip(repo))]
pub fn update(
    repo: &mut dyn BookmarkRepository,
    name: &str,
    url: Option<&str>,
    tags: &[String],
    archived: Option<bool>,
) -> CliResult<()> {
    let mut request = BookmarkUpdate::new(name).with_tags(Tag::parse_tags(tags)?);
    if let Some(url) = url {
        request = request.with_url(url);
    }
    if let Some(archived) = archived {
        request = request.with_archived(archived);
    }

    repo.update(&request)?;
    info!("Updated bookmark: {}", name);
    Ok(())
}

#[instrument(skip(repo, out))]
pub fn list<W: Write>(
    repo: &mut dyn BookmarkRepository,
    out: &mut W,
    separator: &str,
    include_archived: bool,
    is_json: bool,
) -> CliResult<()> {
    let separator = parse_separator(separator)?;
    let bookmarks = repo.list(include_archived)?;

    if is_json {
        write_bookmarks_as_json(out, &bookmarks)
    } else {
        write_bookmarks(out, &bookmarks, separator, include_archived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::sqlite::repository::SqliteBookmarkRepository;
    use crate::util::testing::init_test_env;

    fn setup_repo() -> SqliteBookmarkRepository {
        init_test_env();
        SqliteBookmarkRepository::open(":memory:").unwrap()
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn list_text(repo: &mut SqliteBookmarkRepository, include_archived: bool) -> String {
        let mut out = Vec::new();
        list(repo, &mut out, "|", include_archived, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn given_single_char_when_parse_separator_then_returns_char() {
        assert_eq!(parse_separator("|").unwrap(), '|');
        assert_eq!(parse_separator("é").unwrap(), 'é');
    }

    #[test]
    fn given_wrong_length_when_parse_separator_then_returns_invalid_input() {
        assert!(matches!(parse_separator(""), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_separator("||"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn given_flag_pair_when_archived_flag_then_maps_to_option() {
        assert_eq!(archived_flag(false, false), None);
        assert_eq!(archived_flag(true, false), Some(true));
        assert_eq!(archived_flag(false, true), Some(false));
    }

    #[test]
    fn given_comma_separated_tags_when_add_then_lists_normalized_tags() {
        let mut repo = setup_repo();

        add(&mut repo, "G", "https://g.com", &tags(&["Search,Web"]), false).unwrap();

        assert_eq!(list_text(&mut repo, false), "G|https://g.com|search,web\n");
    }

    #[test]
    fn given_empty_name_when_add_then_returns_invalid_bookmark() {
        let mut repo = setup_repo();

        let result = add(&mut repo, "", "https://g.com", &[], false);

        assert!(matches!(
            result,
            Err(CliError::Domain(DomainError::InvalidBookmark(_)))
        ));
    }

    #[test]
    fn given_full_lifecycle_when_running_commands_then_output_follows_state() {
        let mut repo = setup_repo();

        add(&mut repo, "G", "https://g.com", &tags(&["Search", "Web"]), false).unwrap();
        update(&mut repo, "G", Some("https://g2.com"), &[], None).unwrap();
        assert_eq!(list_text(&mut repo, false), "G|https://g2.com|search,web\n");

        update(&mut repo, "G", None, &[], Some(true)).unwrap();
        assert_eq!(list_text(&mut repo, false), "");
        assert_eq!(list_text(&mut repo, true), "G|https://g2.com|search,web|true\n");

        delete(&mut repo, "G").unwrap();
        assert_eq!(list_text(&mut repo, true), "");
    }

    #[test]
    fn given_tags_without_other_fields_when_update_then_returns_no_fields_to_update() {
        let mut repo = setup_repo();
        add(&mut repo, "G", "https://g.com", &tags(&["search"]), false).unwrap();

        let result = update(&mut repo, "G", None, &tags(&["new"]), None);

        assert!(matches!(
            result,
            Err(CliError::Domain(DomainError::NoFieldsToUpdate(_)))
        ));
        assert_eq!(list_text(&mut repo, false), "G|https://g.com|search\n");
    }

    #[test]
    fn given_bad_separator_when_list_then_fails_before_output() {
        let mut repo = setup_repo();
        let mut out = Vec::new();

        let result = list(&mut repo, &mut out, "::", false, false);

        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }
}
