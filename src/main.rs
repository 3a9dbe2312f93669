use layer_shift::histogram::ColorHistogram;
use layer_shift::image::RgbImage;
use layer_shift::{LayerShifter, ShiftOptions};

fn main() {
    env_logger::init();
    // Demo stub: builds a synthetic gradient and shifts its outer rings
    let (w, h) = (64usize, 48usize);
    let mut img = RgbImage::new(w, h);
    for row in 0..h {
        for col in 0..w {
            img.set(row, col, [(col * 4) as u8, (row * 5) as u8, ((row + col) * 2) as u8]);
        }
    }

    let shifter = LayerShifter::new(ShiftOptions::new(25).with_max_layers(10));
    match shifter.process(&img) {
        Ok(outcome) => {
            let same_colors =
                ColorHistogram::from_image(&img) == ColorHistogram::from_image(&outcome.image);
            println!("{} histogram_preserved={same_colors}", outcome.report.summary_line());
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
