/// File dialog with the text and catch-all filters.
#[macro_export]
macro_rules! text_filters {
    () => {{
        rfd::FileDialog::new()
            .add_filter("Text files", &["txt"])
            .add_filter("All files", &["*"])
    }};
}
