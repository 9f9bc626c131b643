//! Benchmarks for drag dispatch and reconciliation
//!
//! Run with: cargo bench drag

use drawer::config::DrawerConfig;
use drawer::dom::{Document, Element};
use drawer::runtime::Runtime;

fn main() {
    divan::main();
}

fn page(filler: usize) -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    // Unrelated elements ahead of the drawer make discovery walk further
    for _ in 0..filler {
        let section = doc.append_child(root, Element::new("section").with_class("card"));
        doc.append_child(section, Element::new("p"));
    }
    let panel = doc.append_child(
        root,
        Element::new("aside")
            .with_class("q-drawer")
            .with_layout_width(300.0),
    );
    doc.append_child(panel, Element::new("div").with_class("nicegui-drawer"));
    doc.append_child(root, Element::new("div").with_class("q-page-container"));
    doc
}

fn runtime(filler: usize, coalesce_moves: bool) -> Runtime {
    let config = DrawerConfig {
        coalesce_moves,
        ..DrawerConfig::default()
    };
    let mut rt = Runtime::new(page(filler), config);
    rt.ready();
    rt
}

// ============================================================================
// Pointer moves
// ============================================================================

#[divan::bench(args = [0, 100, 1000])]
fn drag_hundred_moves(bencher: divan::Bencher, filler: usize) {
    bencher
        .with_inputs(|| runtime(filler, false))
        .bench_local_values(|mut rt| {
            rt.press_handle(0);
            for x in 0..100 {
                rt.pointer_move(x);
            }
            rt.pointer_release(100);
            divan::black_box(rt.snapshot());
        });
}

#[divan::bench(args = [0, 100, 1000])]
fn drag_hundred_moves_coalesced(bencher: divan::Bencher, filler: usize) {
    bencher
        .with_inputs(|| runtime(filler, true))
        .bench_local_values(|mut rt| {
            rt.press_handle(0);
            for x in 0..100 {
                rt.pointer_move(x);
                if x % 16 == 0 {
                    rt.animation_frame();
                }
            }
            rt.pointer_release(100);
            divan::black_box(rt.snapshot());
        });
}

// ============================================================================
// Reconciliation
// ============================================================================

#[divan::bench(args = [0, 100, 1000])]
fn transition_end(bencher: divan::Bencher, filler: usize) {
    bencher
        .with_inputs(|| runtime(filler, false))
        .bench_local_refs(|rt| {
            if let Some(panel) = rt.panel_node() {
                rt.transition_end(panel);
            }
        });
}
