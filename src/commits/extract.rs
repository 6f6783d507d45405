// src/commits/extract.rs
// =============================================================================
// This module reads the latest commit id from a commit listing page.
//
// The repository host renders its history as:
//
//   <table id="commits-table">
//     <tbody>
//       <tr>
//         <td>author</td>
//         <td><a href="...">1a2b3c4d5e</a> commit message</td>
//         <td>date</td>
//       </tr>
//       ...
//
// The first row is the newest commit and the anchor in its second cell
// holds the short commit id.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
//
// The function works on an already parsed scraper::Html so it can be tested
// against static pages without any network access.
// =============================================================================

use crate::error::ExtractionError;
use scraper::{ElementRef, Html, Selector};

// The newest commit on the scraped branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Abbreviated hash as shown in the history UI, never empty
    pub short_id: String,
}

// Finds the short id of the first commit in the commits table
//
// Parameters:
//   document: the parsed listing page
//   table_id: the id attribute of the commits table
//
// Returns: CommitInfo, or which part of the expected structure is missing
pub fn extract_latest_commit(document: &Html, table_id: &str) -> Result<CommitInfo, ExtractionError> {
    let table = document
        .select(&selector("table"))
        .find(|table| table.value().id() == Some(table_id))
        .ok_or(ExtractionError::MissingTable)?;

    let row = first_row(table).ok_or(ExtractionError::MissingRow)?;

    // Cells: 0 = author, 1 = sha and message, 2 = date
    let sha_cell = row
        .select(&selector("td"))
        .nth(1)
        .ok_or(ExtractionError::MissingLink)?;

    let short_id = sha_cell
        .select(&selector("a"))
        .next()
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(ExtractionError::MissingLink)?;

    Ok(CommitInfo { short_id })
}

// The html5ever parser always wraps rows in a <tbody>, so looking inside the
// first body is enough even when the page leaves it out.
fn first_row(table: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let body = table.select(&selector("tbody")).next()?;
    body.select(&selector("tr")).next()
}

// Our selectors are constants and known to be valid, so a parse failure
// would be a programmer error
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static CSS selector is valid")
}
