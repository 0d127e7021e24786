//! Scroll progress bar and active nav link.
//!
//! Two independent passive scroll listeners. Each writes one signal; the bar
//! and the nav links render from those signals.

use leptos::prelude::*;
use web_sys::Window;

use crate::config::PageConfig;
use crate::dom;
use crate::error::Result;
use crate::state::PageState;

/// Percentage of the scrollable range already scrolled, within `0..=100`.
/// A page that does not scroll (or reports nonsense sizes) is at 0%.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if !range.is_finite() || range <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range * 100.0).clamp(0.0, 100.0)
}

/// Id of the last section (document order) starting at or above
/// `scroll_y + lookahead`.
pub fn active_section<'a, I>(sections: I, scroll_y: f64, lookahead: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let line = scroll_y + lookahead;
    sections
        .into_iter()
        .filter(|(_, top)| *top <= line)
        .last()
        .map(|(id, _)| id)
}

/// The href a nav link must carry to be the active one.
pub fn nav_href(section_id: &str) -> String {
    format!("#{section_id}")
}

pub fn attach_progress(state: PageState) -> Result<()> {
    let window = dom::window()?;
    let update = {
        let window = window.clone();
        move || state.progress.set(read_progress(&window))
    };
    update();
    dom::listen_passive(&window, "scroll", move |_| update())?;
    tracing::debug!("scroll progress bound");
    Ok(())
}

pub fn attach_highlighter(state: PageState, config: &PageConfig) -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;
    let sections = dom::query_all(&document, config.section_selector)?;
    let lookahead = config.nav_lookahead;
    let count = sections.len();

    let update = {
        let window = window.clone();
        move || {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let ids: Vec<(String, f64)> = sections
                .iter()
                .map(|section| (section.id(), f64::from(section.offset_top())))
                .collect();
            let current = active_section(
                ids.iter().map(|(id, top)| (id.as_str(), *top)),
                scroll_y,
                lookahead,
            )
            .map(str::to_owned);
            if state.active_section.get_untracked() != current {
                state.active_section.set(current);
            }
        }
    };
    update();
    dom::listen_passive(&window, "scroll", move |_| update())?;
    tracing::debug!(sections = count, "nav highlighting bound");
    Ok(())
}

fn read_progress(window: &Window) -> f64 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    progress_percent(scroll_y, scroll_height, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECTIONS: [(&str, f64); 3] = [("problem", 0.0), ("market", 800.0), ("team", 1600.0)];

    #[test]
    fn progress_is_zero_when_page_fits_viewport() {
        assert_eq!(progress_percent(0.0, 900.0, 900.0), 0.0);
        assert_eq!(progress_percent(0.0, 600.0, 900.0), 0.0);
    }

    #[test]
    fn progress_tracks_scroll_range() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(500.0, 3000.0, 1000.0), 25.0);
        assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn progress_clamps_overscroll() {
        // Rubber-band scrolling on macOS/iOS reports values past the range.
        assert_eq!(progress_percent(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(2100.0, 3000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(f64::NAN, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn highlights_last_section_above_lookahead() {
        assert_eq!(active_section(SECTIONS, 850.0, 200.0), Some("market"));
    }

    #[test]
    fn lookahead_reaches_next_section_early() {
        assert_eq!(active_section(SECTIONS, 1400.0, 200.0), Some("team"));
        assert_eq!(active_section(SECTIONS, 1399.0, 200.0), Some("market"));
    }

    #[test]
    fn no_section_above_line() {
        let sections = [("market", 800.0)];
        assert_eq!(active_section(sections, 0.0, 200.0), None);
        assert_eq!(active_section(Vec::<(&str, f64)>::new(), 500.0, 200.0), None);
    }

    #[test]
    fn nav_href_prefixes_hash() {
        assert_eq!(nav_href("market"), "#market");
    }
}
