use std::io;

use microstrip_patch::design::{design_patch, PatchInputs};
use microstrip_patch::report::write_design_report;

fn main() {
    // Classic 2.4 GHz WiFi patch on 1.6 mm FR-4.
    let inputs = match PatchInputs::new(2.4e9, 4.4, 1.6e-3) {
        Ok(inputs) => inputs,
        Err(err) => {
            eprintln!("input rejected: {err}");
            return;
        }
    };

    match design_patch(&inputs) {
        Ok(design) => {
            write_design_report(io::stdout().lock(), "2.4 GHz patch on FR-4", &design)
                .expect("stdout is writable");
        }
        Err(err) => eprintln!("design failed: {err}"),
    }
}
