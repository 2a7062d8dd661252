/// What a navigation link click should do, decided from its `href`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkAction<'a> {
    /// Same-page fragment: suppress navigation and scroll to the element
    /// with this id, if there is one.
    ScrollTo(&'a str),
    /// Bare `#`: suppress navigation, nothing to scroll to.
    Intercept,
    /// Leave the browser to navigate normally.
    Navigate,
}

impl LinkAction<'_> {
    #[inline]
    pub fn prevents_default(&self) -> bool {
        !matches!(self, LinkAction::Navigate)
    }
}

pub fn classify_href(href: Option<&str>) -> LinkAction<'_> {
    match href.and_then(|h| h.strip_prefix('#')) {
        Some("") => LinkAction::Intercept,
        Some(id) => LinkAction::ScrollTo(id),
        None => LinkAction::Navigate,
    }
}
