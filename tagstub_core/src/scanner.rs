use std::sync::LazyLock;

use regex::Matches;
use regex::Regex;

/// Matches a candidate opening tag: `<`, a run of characters that contains
/// neither `/` nor `>`, then `>`. Closing tags (`</Page>`) and self-closing
/// tags (`<br/>`) never match because of the `/` exclusion, and the `>`
/// exclusion keeps adjacent tags from merging into a single match.
static OPENING_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^/>]*>").unwrap());

/// A single scanner match: the literal tag text and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTag<'a> {
	/// The matched substring, including both angle brackets.
	pub text: &'a str,
	/// Character offset of the `<` within the scanned text.
	pub offset: usize,
}

/// Lazily yields every candidate opening tag in document order.
///
/// The scanner performs no validation beyond the shape of the match. Deciding
/// whether a matched tag is usable is the extractor's job, so a snippet full
/// of broken tags still scans cleanly.
pub struct TagScanner<'a> {
	source: &'a str,
	matches: Matches<'static, 'a>,
	chars_before: usize,
	bytes_before: usize,
}

impl<'a> Iterator for TagScanner<'a> {
	type Item = RawTag<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let found = self.matches.next()?;
		// Offsets are reported in characters, not bytes, counted incrementally
		// from the previous match.
		self.chars_before += self.source[self.bytes_before..found.start()].chars().count();
		self.bytes_before = found.start();

		Some(RawTag {
			text: found.as_str(),
			offset: self.chars_before,
		})
	}
}

/// Scan `text` for candidate opening tags.
///
/// Each call returns a fresh iterator over the same input, so a snippet can
/// be scanned as often as needed.
pub fn scan_tags(text: &str) -> TagScanner<'_> {
	TagScanner {
		source: text,
		matches: OPENING_TAG_RE.find_iter(text),
		chars_before: 0,
		bytes_before: 0,
	}
}
