//! Loaded text and the page cursor over it.

use crate::prelude::*;

/// The lines of one text file. Replaced wholesale on every open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    /// Each line keeps its `\n`; a final line without one is kept as is.
    pub lines: Vec<String>,
}

/// Convert `\r\n` and lone `\r` to `\n`.
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

impl Document {
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        let text = normalize_line_endings(text);
        Self {
            path: path.into(),
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    /// Read `path` as UTF-8 text.
    pub fn read(path: &Path) -> Result<Self, AppError> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|_| AppError::NotText {
            path: path.to_path_buf(),
        })?;
        Ok(Self::from_text(path, &text))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Splits the open document into fixed-size pages.
#[derive(Debug, Clone)]
pub struct Pagination {
    document: Option<Document>,
    page_index: usize,
    lines_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_LINES_PER_PAGE)
    }
}

impl Pagination {
    pub fn new(lines_per_page: usize) -> Self {
        Self {
            document: None,
            page_index: 0,
            lines_per_page: lines_per_page.max(1),
        }
    }

    /// Show `document`, starting on the page that contains line `resume_offset`.
    pub fn load_document(&mut self, document: Document, resume_offset: usize) {
        self.document = Some(document);
        self.page_index = resume_offset / self.lines_per_page;
        self.clamp_index();
    }

    pub fn path(&self) -> Option<&Path> {
        self.document.as_ref().map(|d| d.path.as_path())
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    pub fn total_lines(&self) -> usize {
        self.document.as_ref().map_or(0, Document::len)
    }

    pub fn total_pages(&self) -> usize {
        self.total_lines().div_ceil(self.lines_per_page)
    }

    /// Lines on the current page, clipped to the end of the document.
    pub fn current_page(&self) -> &[String] {
        let Some(document) = &self.document else {
            return &[];
        };
        let start = (self.page_index * self.lines_per_page).min(document.len());
        let end = (start + self.lines_per_page).min(document.len());
        &document.lines[start..end]
    }

    pub fn page_text(&self) -> String {
        self.current_page().concat()
    }

    /// Advance one page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page_index + 1 < self.total_pages() {
            self.page_index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns false on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.page_index > 0 {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }

    /// Resize pages to what the text area can hold.
    ///
    /// The page index is kept as a number, so after a change it points at
    /// a different slice of the text. It is only pulled back when it would
    /// run past the last page.
    pub fn recompute_lines_per_page(&mut self, visible_line_capacity: usize) -> bool {
        let lines_per_page = visible_line_capacity.max(1);
        if lines_per_page == self.lines_per_page {
            return false;
        }
        debug!(
            "Lines per page {} -> {}",
            self.lines_per_page, lines_per_page
        );
        self.lines_per_page = lines_per_page;
        self.clamp_index();
        true
    }

    /// Line offset persisted when the file is closed.
    pub fn resume_offset(&self) -> usize {
        self.page_index * self.lines_per_page
    }

    fn clamp_index(&mut self) {
        let last = self.total_pages().saturating_sub(1);
        if self.page_index > last {
            self.page_index = last;
        }
    }
}
