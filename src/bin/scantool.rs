use clap::{Parser, Subcommand};
use scanview::geometry::{self, Rotation, ViewTransform};
use scanview::{
    BarcodeDecoder, Detection, Frame, RawRect, Result, ScanRatio, Size, ViewOrientation,
    scan_image,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scantool", version, about = "scanview CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Map one decoder box through the full geometry pipeline
    MapBox {
        #[arg(long)]
        image_width: u32,
        #[arg(long)]
        image_height: u32,
        #[arg(long, default_value_t = 0)]
        rotation: i32,
        #[arg(long)]
        left: f32,
        #[arg(long)]
        top: f32,
        #[arg(long)]
        width: f32,
        #[arg(long)]
        height: f32,
        #[arg(long)]
        view_width: Option<u32>,
        #[arg(long)]
        view_height: Option<u32>,
        #[arg(long, default_value = "portrait")]
        orientation: String,
    },
    /// Print the admissible scan window for a view size and ratio
    Window {
        #[arg(long)]
        view_width: u32,
        #[arg(long)]
        view_height: u32,
        #[arg(long, default_value_t = 1.0)]
        ratio_width: f32,
        #[arg(long, default_value_t = 1.0)]
        ratio_height: f32,
    },
    /// Scan an image using detections from a JSON fixture file
    ScanImage {
        #[arg(long)]
        image: PathBuf,
        /// JSON array of detections (sensor-space boxes + values)
        #[arg(long)]
        detections: PathBuf,
        /// JSON options bag, as the host would pass it
        #[arg(long)]
        options: Option<PathBuf>,
    },
}

struct FixtureDecoder(Vec<Detection>);

impl BarcodeDecoder for FixtureDecoder {
    fn decode(&self, _frame: &Frame<'_>) -> Result<Vec<Detection>> {
        Ok(self.0.clone())
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::MapBox {
            image_width,
            image_height,
            rotation,
            left,
            top,
            width,
            height,
            view_width,
            view_height,
            orientation,
        } => {
            let raw_size = Size::new(image_width, image_height);
            let rotation = Rotation::from_degrees(rotation);
            let orientation = ViewOrientation::from_tag(&orientation).unwrap_or_default();
            let configured = match (view_width, view_height) {
                (Some(w), Some(h)) => Some(Size::new(w, h)),
                _ => None,
            };

            let corrected_size = rotation.corrected_size(raw_size);
            let view = geometry::safe_view_size(corrected_size, configured);
            let transform = ViewTransform::aspect_fill(corrected_size, view);

            let raw = RawRect::new(left, top, width, height);
            let corrected = geometry::rectify(&raw, raw_size, rotation);
            let view_box = transform.apply(&corrected);

            println!("corrected size: {}x{}", corrected_size.width, corrected_size.height);
            println!("view size:      {}x{}", view.width, view.height);
            println!(
                "transform:      scale={} dx={} dy={}",
                transform.scale, transform.dx, transform.dy
            );
            println!("corrected box:  {:?}", corrected);
            println!("view box:       {:?}", view_box);
            match geometry::normalized_rect(&view_box, view, orientation) {
                Some(normalized) => println!("normalized:     {:?}", normalized),
                None => println!("normalized:     (degenerate view)"),
            }
        }
        Command::Window {
            view_width,
            view_height,
            ratio_width,
            ratio_height,
        } => {
            let window = geometry::scan_window(
                Size::new(view_width, view_height),
                ScanRatio::new(ratio_width, ratio_height),
            );
            println!("scan window: {:?}", window);
        }
        Command::ScanImage {
            image,
            detections,
            options,
        } => {
            let detections: Vec<Detection> = match std::fs::read_to_string(&detections)
                .map_err(|e| e.to_string())
                .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()))
            {
                Ok(d) => d,
                Err(err) => {
                    eprintln!("failed to read detections fixture: {}", err);
                    std::process::exit(1);
                }
            };
            let bag = options.map(|path| {
                let raw = std::fs::read_to_string(&path).unwrap_or_else(|err| {
                    eprintln!("failed to read options: {}", err);
                    std::process::exit(1);
                });
                serde_json::from_str(&raw).unwrap_or_else(|err| {
                    eprintln!("failed to parse options: {}", err);
                    std::process::exit(1);
                })
            });

            match scan_image(&image, bag.as_ref(), &FixtureDecoder(detections)) {
                Ok(barcodes) => {
                    println!("{}", serde_json::to_string_pretty(&barcodes).unwrap());
                }
                Err(err) => {
                    eprintln!("scan failed: {}", err);
                    std::process::exit(1);
                }
            }
        }
    }
}
