#![forbid(unsafe_code)]

//! Simulated page timeline for crouton.
//!
//! Creates a few toasts, hovers one of them, and advances the page clock in
//! steps, printing the element tree after each interesting moment. Useful
//! for eyeballing stacking order, countdown behavior, and teardown without
//! a browser.

use crouton::{PointerEvent, Progress, Timeout, ToastOptions, Toaster};
use crouton_dom::{NodeId, Page};
use std::time::Duration;

fn main() {
    let mut page = Page::new();
    let mut toaster = Toaster::new();

    let saved = toaster.toast(&mut page, "Saved");
    let warned = toaster.toast(
        &mut page,
        ToastOptions::new()
            .title("Low disk space")
            .message("Less than 500 MB left on <code>/var</code>.")
            .kind("warning")
            .position("top-right")
            .timeout(Timeout::After(Duration::from_secs(2)))
            .progress(Progress::Bottom),
    );
    toaster.toast(
        &mut page,
        ToastOptions::new()
            .message("Connection restored")
            .kind("success")
            .position("top-right"),
    );

    println!("t=0ms: three toasts created");
    print_tree(&page);

    toaster.advance(&mut page, Duration::from_millis(1000));
    println!(
        "t=1000ms: warning countdown at {}%",
        toaster
            .get(warned)
            .and_then(|t| t.progress_width())
            .unwrap_or(0)
    );

    toaster.pointer(&mut page, warned, PointerEvent::Enter);
    toaster.advance(&mut page, Duration::from_millis(5000));
    println!(
        "t=6000ms: warning paused by hover, phase {:?}",
        toaster.get(warned).map(|t| t.phase())
    );
    toaster.pointer(&mut page, warned, PointerEvent::Leave);
    println!("t=6000ms: hover left, countdown restarted from the full delay");

    let removed = toaster.advance(&mut page, Duration::from_millis(2000));
    println!("t=8000ms: removed {removed:?} (the 3s default toast expired long ago)");
    assert!(!toaster.contains(saved));

    let removed = toaster.advance(&mut page, Duration::from_millis(300));
    println!("t=8300ms: removed {removed:?} (warning faded out)");
    print_tree(&page);
}

fn print_tree(page: &Page) {
    print_node(page, page.dom.body(), 0);
    println!();
}

fn print_node(page: &Page, node: NodeId, depth: usize) {
    let indent = "  ".repeat(depth);
    let tag = page.dom.tag(node).unwrap_or("?");
    let classes = page.dom.classes(node).join(".");
    let mut line = format!("{indent}<{tag}");
    if !classes.is_empty() {
        line.push_str(&format!(" class=\"{classes}\""));
    }
    if let Some(opacity) = page.dom.style(node, "opacity") {
        line.push_str(&format!(" style=\"opacity:{opacity}\""));
    }
    line.push('>');
    if let Some(text) = page.dom.text(node) {
        line.push_str(text);
    }
    if let Some(markup) = page.dom.markup(node) {
        line.push_str(markup);
    }
    println!("{line}");
    for &child in page.dom.children(node) {
        print_node(page, child, depth + 1);
    }
}
