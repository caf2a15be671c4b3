use std::{borrow::Cow, fmt};

use crate::error::RouteTableError;

/// Top-level pages the front-end can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageIdentity {
    Lobby,
    LeaderBoard,
    About,
    Privacy,
}

impl PageIdentity {
    /// All pages in navigation order.
    pub const ALL: [PageIdentity; 4] = [
        PageIdentity::Lobby,
        PageIdentity::LeaderBoard,
        PageIdentity::About,
        PageIdentity::Privacy,
    ];

    /// Canonical location of the page. Redirects land here.
    pub fn path(&self) -> &'static str {
        match self {
            PageIdentity::Lobby => "/lobby",
            PageIdentity::LeaderBoard => "/leader-board",
            PageIdentity::About => "/about",
            PageIdentity::Privacy => "/privacy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageIdentity::Lobby => "ID Lobby",
            PageIdentity::LeaderBoard => "ID Leader Board",
            PageIdentity::About => "About",
            PageIdentity::Privacy => "Privacy",
        }
    }
}

impl fmt::Display for PageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: Cow<'static, str>,
    pub page: PageIdentity,
    pub is_fallback: bool,
}

impl RouteEntry {
    pub fn new(pattern: impl Into<Cow<'static, str>>, page: PageIdentity) -> Self {
        Self {
            pattern: pattern.into(),
            page,
            is_fallback: false,
        }
    }

    /// Catch-all entry. Its pattern is informational only, it is never
    /// compared against a path.
    pub fn fallback(page: PageIdentity) -> Self {
        Self {
            pattern: "*".into(),
            page,
            is_fallback: true,
        }
    }
}

/// Outcome of routing a single navigation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// The path named a page directly.
    Render(PageIdentity),
    /// Nothing matched; the location should be rewritten to the page's path.
    Redirect(PageIdentity),
}

impl Navigation {
    pub fn page(&self) -> PageIdentity {
        match self {
            Navigation::Render(page) | Navigation::Redirect(page) => *page,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirect(_))
    }
}

/// Ordered, immutable mapping from paths to pages with exactly one fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    fallback: PageIdentity,
}

impl RouteTable {
    /// Builds a table from custom entries. Fails unless exactly one entry is
    /// a fallback and no pattern is registered twice.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let fallbacks: Vec<&RouteEntry> = entries.iter().filter(|e| e.is_fallback).collect();
        let fallback = match fallbacks.as_slice() {
            [] => return Err(RouteTableError::NoFallback),
            [only] => only.page,
            many => return Err(RouteTableError::MultipleFallbacks(many.len())),
        };

        let explicit: Vec<RouteEntry> = entries.into_iter().filter(|e| !e.is_fallback).collect();
        for (i, entry) in explicit.iter().enumerate() {
            let pattern = normalize(&entry.pattern);
            if let Some(earlier) = explicit[..i]
                .iter()
                .find(|e| normalize(&e.pattern).eq_ignore_ascii_case(pattern))
            {
                return Err(RouteTableError::DuplicatePattern {
                    pattern: entry.pattern.to_string(),
                    first: earlier.page,
                    second: entry.page,
                });
            }
        }

        Ok(Self {
            entries: explicit,
            fallback,
        })
    }

    /// Explicit (non-fallback) entries in match order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn fallback(&self) -> PageIdentity {
        self.fallback
    }

    pub fn navigate(&self, path: &str) -> Navigation {
        let path = normalize(path);
        self.entries
            .iter()
            .find(|entry| normalize(&entry.pattern).eq_ignore_ascii_case(path))
            .map(|entry| Navigation::Render(entry.page))
            .unwrap_or(Navigation::Redirect(self.fallback))
    }

    /// Resolves a location to the page to render. Never fails: unmatched
    /// paths land on the fallback page.
    pub fn resolve(&self, path: &str) -> PageIdentity {
        self.navigate(path).page()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            entries: PageIdentity::ALL
                .iter()
                .map(|page| RouteEntry::new(page.path(), *page))
                .collect(),
            fallback: PageIdentity::Lobby,
        }
    }
}

/// Drops query string, fragment and a single trailing slash.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}
