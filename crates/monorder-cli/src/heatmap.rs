//! Heatmap rendering of term matrices as binary PPM images.
//!
//! Rows are terms, columns are variables, and each cell is shaded from pale
//! yellow (exponent 0) to dark red (largest exponent in the matrix).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use monorder_core::Monomial;

/// Target image width in pixels; narrow matrices get wider cells.
const TARGET_WIDTH: usize = 800;
/// Target image height in pixels.
const TARGET_HEIGHT: usize = 400;

// Yellow-orange-red ramp stops.
const RAMP: [[u8; 3]; 3] = [[255, 255, 204], [253, 141, 60], [128, 0, 38]];

/// Maps `value / max` onto the ramp.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn shade(value: u32, max: u32) -> [u8; 3] {
    if max == 0 {
        return RAMP[0];
    }
    let t = f64::from(value) / f64::from(max);
    let (lo, hi, local) = if t <= 0.5 {
        (RAMP[0], RAMP[1], t * 2.0)
    } else {
        (RAMP[1], RAMP[2], (t - 0.5) * 2.0)
    };

    std::array::from_fn(|c| {
        let (lo, hi) = (f64::from(lo[c]), f64::from(hi[c]));
        (lo + (hi - lo) * local).round().clamp(0.0, 255.0) as u8
    })
}

/// Renders `terms` as a PPM image into `out`.
///
/// # Errors
///
/// Propagates write failures.
pub fn render<W: Write>(out: &mut W, terms: &[Monomial]) -> io::Result<()> {
    let rows = terms.len();
    let cols = terms.first().map_or(0, Monomial::num_vars);
    if rows == 0 || cols == 0 {
        writeln!(out, "P6\n1 1\n255")?;
        return out.write_all(&RAMP[0]);
    }

    let cell_w = (TARGET_WIDTH / cols).max(1);
    let cell_h = (TARGET_HEIGHT / rows).max(1);
    let width = cols * cell_w;
    let height = rows * cell_h;
    let max = terms
        .iter()
        .flat_map(|t| t.exponents().iter().copied())
        .max()
        .unwrap_or(0);

    writeln!(out, "P6\n{width} {height}\n255")?;

    let mut line = Vec::with_capacity(width * 3);
    for term in terms {
        line.clear();
        for &e in term.exponents() {
            let rgb = shade(e, max);
            for _ in 0..cell_w {
                line.extend_from_slice(&rgb);
            }
        }
        for _ in 0..cell_h {
            out.write_all(&line)?;
        }
    }
    Ok(())
}

/// Renders `terms` to the file at `path`.
///
/// # Errors
///
/// Fails if the file cannot be created or written.
pub fn save(path: &Path, terms: &[Monomial]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    render(&mut out, terms)?;
    out.flush()?;
    log::debug!("wrote heatmap {}", path.display());
    Ok(())
}
