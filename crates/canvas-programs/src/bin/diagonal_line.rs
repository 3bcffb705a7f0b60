//! Prints the main diagonal `[[0,0],...,[9,9]]`.

use canvas_programs::{run, Program};

fn main() -> anyhow::Result<()> {
    run(Program::DiagonalLine)
}
