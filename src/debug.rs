use std::fmt::Write;

use crate::layout::Layout;

/// One line per row: `row 0 [w=105 h=10]: #0 #1`, followed by the overall size.
pub fn dump(layout: &Layout) -> String {
    let mut out = String::new();
    for (i, row) in layout.rows().iter().enumerate() {
        let _ = write!(out, "row {i} [w={} h={}]:", row.width(), row.height());
        for id in row.ids() {
            let _ = write!(out, " {id}");
        }
        out.push('\n');
    }
    let _ = writeln!(out, "size {}x{}", layout.width(), layout.height());
    out
}
