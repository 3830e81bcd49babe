//! Inspect a trr trajectory.
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use trajfile::{output_values, Format, OutputValue};
use xdrfile::{Frame, Trajectory};

/// Print per-frame values from a trr trajectory.
#[derive(Parser)]
struct Args {
    /// Input path (trr).
    input: PathBuf,

    /// Print the time value for each frame to standard output.
    #[arg(long)]
    times: bool,

    /// Print the step number for each frame to standard output.
    ///
    /// If several of `times`, `steps`, and `box` are active, they will be separated by tabs and
    /// printed in that order.
    #[arg(long)]
    steps: bool,

    /// Print the box vectors for each frame to standard output.
    #[arg(long = "box")]
    boxvec: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let format = match Format::from_path(&args.input) {
        Some(format) => format,
        None => {
            eprintln!(
                "unrecognized trajectory extension: {}",
                args.input.display()
            );
            std::process::exit(1);
        }
    };
    let time_idx = format
        .output_value_index("time")
        .expect("the format should name a time position");
    let box_idx = format
        .output_value_index("box")
        .expect("the format should name a box position");

    let mut reader = format
        .open_read(&args.input)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let num_atoms = reader
        .get_num_atoms()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let mut frame = Frame::with_len(num_atoms);

    let mut stdout = std::io::stdout();
    let mut nframes = 0;
    while reader.read(&mut frame).is_ok() {
        nframes += 1;
        if !(args.times || args.steps || args.boxvec) {
            continue;
        }
        let values = output_values(&frame);
        if args.times {
            if let OutputValue::Time(time) = values[time_idx] {
                write!(stdout, "{time:.3}\t")?;
            }
        }
        if args.steps {
            // The step number has no named position in the trr layout, so take it straight off
            // the frame.
            write!(stdout, "{}\t", frame.step)?;
        }
        if args.boxvec {
            if let OutputValue::BoxVec(boxvec) = &values[box_idx] {
                write!(stdout, "{boxvec}")?;
            }
        }
        writeln!(stdout)?;
    }
    if !(args.times || args.steps || args.boxvec) {
        eprintln!("read {nframes} frames of {num_atoms} atoms");
    }

    Ok(())
}
