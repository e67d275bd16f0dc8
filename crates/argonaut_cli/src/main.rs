use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use argonaut_angle::{degrees_to_hms, lonlat_label, parse_angle, ra_label};
use argonaut_frames::{
    StampView, TangentPoint, equatorial_to_galactic_j2000, galactic_to_equatorial_j2000,
    project_gnomonic, project_gnomonic_inverse,
};
use argonaut_query::{CoordSystem, PreparedQuery, prepare_query, prepare_stamp_query};

#[derive(Parser)]
#[command(name = "argonaut", about = "Dust map coordinate tools")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum System {
    Galactic,
    Equatorial,
}

impl From<System> for CoordSystem {
    fn from(s: System) -> Self {
        match s {
            System::Galactic => CoordSystem::Galactic,
            System::Equatorial => CoordSystem::Equatorial,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a typed angle
    Parse {
        /// Angle text, e.g. 45.5, 10h5m3.45s or -15d43m15.8s
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Also accept hours-minutes-seconds
        #[arg(long)]
        hour_angle: bool,
    },
    /// Convert degrees to hours, minutes, seconds
    Hms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Equatorial (J2000) to galactic
    Equ2gal {
        /// Right ascension (degrees or hh:mm:ss)
        #[arg(allow_hyphen_values = true)]
        ra: String,
        /// Declination (degrees or dd:mm:ss)
        #[arg(allow_hyphen_values = true)]
        dec: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Galactic to equatorial (J2000)
    Gal2equ {
        /// Galactic longitude (degrees or dd:mm:ss)
        #[arg(allow_hyphen_values = true)]
        l: String,
        /// Galactic latitude (degrees or dd:mm:ss)
        #[arg(allow_hyphen_values = true)]
        b: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Gnomonic projection of a sky position (degrees in)
    Project {
        /// Longitude of the tangent point in degrees
        #[arg(long, allow_negative_numbers = true)]
        lon0: f64,
        /// Latitude of the tangent point in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat0: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
    },
    /// Inverse gnomonic projection of a plane point (degrees out)
    Unproject {
        /// Longitude of the tangent point in degrees
        #[arg(long, allow_negative_numbers = true)]
        lon0: f64,
        /// Latitude of the tangent point in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat0: f64,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Sky position under a postage-stamp pixel
    Stamp {
        /// Galactic longitude of the stamp center
        #[arg(long, allow_negative_numbers = true)]
        l: f64,
        /// Galactic latitude of the stamp center
        #[arg(long, allow_negative_numbers = true)]
        b: f64,
        /// Angular radius from center to edge in degrees
        #[arg(long)]
        radius: f64,
        /// Image width in pixels
        #[arg(long)]
        width: f64,
        /// Image height in pixels
        #[arg(long)]
        height: f64,
        /// Pixel column (0 = left edge)
        px: f64,
        /// Pixel row (0 = top edge)
        py: f64,
        /// Also print the query a click here would send
        #[arg(long, value_enum)]
        click: Option<System>,
    },
    /// Validate typed coordinates and print the query body
    Query {
        /// Longitude / right ascension
        #[arg(allow_hyphen_values = true)]
        lon: String,
        /// Latitude / declination
        #[arg(allow_hyphen_values = true)]
        lat: String,
        /// Coordinate system of the input
        #[arg(long, value_enum, default_value = "galactic")]
        system: System,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse { text, hour_angle } => {
            let parsed = parse_angle(&text, hour_angle);
            if !parsed.is_valid() {
                eprintln!("Invalid angle: {text:?}");
                std::process::exit(1);
            }
            println!("{parsed}");
        }

        Commands::Hms { deg } => {
            let hms = degrees_to_hms(deg);
            println!("{hms}");
            println!("RA label: {}", ra_label(deg));
        }

        Commands::Equ2gal { ra, dec, json } => {
            let ra = require_angle(&ra, true, "right ascension");
            let dec = require_latitude(&dec, "declination");
            let g = equatorial_to_galactic_j2000(ra, dec);
            warn_non_finite(g.l_deg, g.b_deg);
            if json {
                print_json(&g);
            } else {
                println!("l = {:.6} deg  b = {:.6} deg", g.l_deg, g.b_deg);
            }
        }

        Commands::Gal2equ { l, b, json } => {
            let l = require_angle(&l, false, "galactic longitude");
            let b = require_latitude(&b, "galactic latitude");
            let e = galactic_to_equatorial_j2000(l, b);
            warn_non_finite(e.ra_deg, e.dec_deg);
            if json {
                print_json(&e);
                return;
            }
            println!(
                "ra = {:.6} deg ({})  dec = {:.6} deg",
                e.ra_deg,
                ra_label(e.ra_deg),
                e.dec_deg
            );
        }

        Commands::Project {
            lon0,
            lat0,
            lon,
            lat,
        } => {
            let center = TangentPoint::from_degrees(lon0, lat0);
            let p = project_gnomonic(lon.to_radians(), lat.to_radians(), &center);
            warn_non_finite(p.x, p.y);
            println!("x = {:.9}  y = {:.9}", p.x, p.y);
        }

        Commands::Unproject { lon0, lat0, x, y } => {
            let center = TangentPoint::from_degrees(lon0, lat0);
            let s = project_gnomonic_inverse(x, y, &center);
            warn_non_finite(s.lon_rad, s.lat_rad);
            println!("lon = {:.6} deg  lat = {:.6} deg", s.lon_deg(), s.lat_deg());
        }

        Commands::Stamp {
            l,
            b,
            radius,
            width,
            height,
            px,
            py,
            click,
        } => {
            let view = StampView::new(l, b, radius, width, height).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let center = view.center();
            log::debug!(
                "stamp center ({}, {}), radius {} deg",
                center.l_deg,
                center.b_deg,
                view.radius_deg()
            );
            if !view.contains_pixel(px, py) {
                log::warn!("pixel ({px}, {py}) is outside the {width}x{height} image");
            }
            let g = view.pixel_to_galactic(px, py);
            let e = view.pixel_to_equatorial(px, py);
            println!("l = {}  b = {}", lonlat_label(g.l_deg, 1), lonlat_label(g.b_deg, 1));
            println!(
                "\u{03B1} = {}  \u{03B4} = {}",
                ra_label(e.ra_deg),
                lonlat_label(e.dec_deg, 1)
            );
            if let Some(system) = click {
                match prepare_stamp_query(&view, px, py, system.into()) {
                    Ok(q) => print_query(&q),
                    Err(e) => {
                        eprintln!("{e}");
                        std::process::exit(1);
                    }
                }
            }
        }

        Commands::Query { lon, lat, system } => match prepare_query(&lon, &lat, system.into()) {
            Ok(q) => {
                if let Some(w) = q.warning {
                    eprintln!("Warning: {w}");
                }
                print_query(&q);
            }
            Err(e) => {
                eprintln!("Invalid coordinates: {e}");
                std::process::exit(1);
            }
        },
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn print_query(q: &PreparedQuery) {
    let (lon_sym, lat_sym) = q.system.symbols();
    let (lon_txt, lat_txt) = q.input_echo();
    println!("{} input: {lon_sym} = {lon_txt}  {lat_sym} = {lat_txt}", q.system.name());
    match q.request.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn require_angle(text: &str, allow_hour_angle: bool, what: &str) -> f64 {
    parse_angle(text, allow_hour_angle).value().unwrap_or_else(|| {
        eprintln!("Invalid {what}: {text:?}");
        std::process::exit(1);
    })
}

fn require_latitude(text: &str, what: &str) -> f64 {
    let v = require_angle(text, false, what);
    if !(-90.0..=90.0).contains(&v) {
        eprintln!("Invalid {what}: {v} is outside [-90, 90]");
        std::process::exit(1);
    }
    v
}

fn warn_non_finite(a: f64, b: f64) {
    if !a.is_finite() || !b.is_finite() {
        log::warn!("result is not finite; the input sits on a singularity of the transform");
    }
}
