//! Prints the 4x4 box of cells from (2,2) to (5,5).

use canvas_programs::{run, Program};

fn main() -> anyhow::Result<()> {
    run(Program::BoxPattern)
}
