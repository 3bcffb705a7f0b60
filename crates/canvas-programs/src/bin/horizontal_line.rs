//! Prints the row-5 horizontal line `[[0,5],...,[9,5]]`.

use canvas_programs::{run, Program};

fn main() -> anyhow::Result<()> {
    run(Program::HorizontalLine)
}
