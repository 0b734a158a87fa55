//! Human-readable report export.
//!
//! Serializes a [`PatchDesign`] snapshot to plain text with fixed formatting:
//! lengths in millimeters at two decimals, effective permittivity at three,
//! impedance and directivity at two, conductances in scientific notation.

use std::io::{self, Write};

use crate::design::PatchDesign;

/// Writes a plain-text design report with a caller-supplied title line.
///
/// # Errors
///
/// Propagates any I/O error from the underlying writer.
pub fn write_design_report<W: Write>(mut w: W, title: &str, design: &PatchDesign) -> io::Result<()> {
    writeln!(w, "{title}")?;
    writeln!(w, "{}", "=".repeat(title.len()))?;
    writeln!(w)?;
    writeln!(w, "Inputs")?;
    writeln!(
        w,
        "  Resonant frequency:      {:.2} GHz",
        design.resonant_frequency_hz / 1.0e9
    )?;
    writeln!(
        w,
        "  Substrate permittivity:  {:.2}",
        design.substrate_permittivity
    )?;
    writeln!(
        w,
        "  Substrate height:        {:.2} mm",
        design.substrate_height_m * 1.0e3
    )?;
    writeln!(w)?;
    writeln!(w, "Design")?;
    writeln!(w, "  Patch width:             {:.2} mm", design.patch_width_m * 1.0e3)?;
    writeln!(
        w,
        "  Effective permittivity:  {:.3}",
        design.effective_permittivity
    )?;
    writeln!(w, "  Patch length:            {:.2} mm", design.patch_length_m * 1.0e3)?;
    writeln!(
        w,
        "  Slot conductance G1:     {:.2e} S",
        design.slot_conductance_s
    )?;
    writeln!(
        w,
        "  Mutual conductance G12:  {:.2e} S",
        design.mutual_conductance_s
    )?;
    writeln!(
        w,
        "  Edge resistance:         {:.2} Ohm",
        design.edge_resistance_ohm
    )?;
    writeln!(w, "  Feed inset (50 Ohm):     {:.2} mm", design.feed_inset_m * 1.0e3)?;
    writeln!(w, "  Directivity:             {:.2} dBi", design.directivity_dbi)?;
    Ok(())
}
