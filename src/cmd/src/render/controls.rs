use std::io::Write;

use uplift_gen::params::Control;

use crate::error::Result;
use crate::render::Paint;

const TRACK_WIDTH: usize = 40;

/// `label`, then a slider track with the knob at `value`.
pub fn render_control<W: Write>(
    w: &mut W,
    control: &Control,
    value: i64,
    paint: Paint,
) -> Result<()> {
    let span = (control.max - control.min).max(1) as f64;
    let pos = ((value - control.min) as f64 / span * (TRACK_WIDTH - 1) as f64)
        .round()
        .clamp(0., (TRACK_WIDTH - 1) as f64) as usize;
    let track = (0..TRACK_WIDTH)
        .map(|i| match i.cmp(&pos) {
            std::cmp::Ordering::Less => '=',
            std::cmp::Ordering::Equal => 'o',
            std::cmp::Ordering::Greater => '-',
        })
        .collect::<String>();

    writeln!(w, "{}", control.label)?;
    writeln!(
        w,
        "  [{track}] {}  ({}..{}, step {})",
        paint.bold(&value.to_string()),
        control.min,
        control.max,
        control.step
    )?;

    Ok(())
}
