use chrono::TimeZone;
use chrono_tz::Europe::Paris;

use suncalc::{moon_illumination, rad_to_deg, MoonTimes, Observer};

fn main() -> suncalc::Result<()> {
    let latitude = 48.85;
    let longitude = 2.35;
    let observer = Observer::new(latitude, longitude)?;

    let dt = Paris.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap();

    let sun = observer.sun_position(&dt);
    let times = observer.sun_times(&dt);
    let moon = observer.moon_position(&dt);
    let illumination = moon_illumination(&dt);
    let moon_times = observer.moon_times(&dt)?;

    println!("=== Sun and Moon Calculation Example ===");
    println!("Location: Paris ({:.2}°N, {:.2}°E)", latitude, longitude);
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Sun Position ---");
    println!("Azimuth: {:.2}° (0°=S, 90°=W)", rad_to_deg(sun.azimuth));
    println!("Altitude: {:.2}°", rad_to_deg(sun.altitude));
    println!();
    println!("--- Sun Times ---");
    for (label, time) in times.iter() {
        match time {
            Some(time) => println!("{:<14} {}", label, time.format("%H:%M:%S")),
            None => println!("{:<14} -", label),
        }
    }
    println!();
    println!("--- Moon ---");
    println!("Azimuth: {:.2}°", rad_to_deg(moon.azimuth()));
    println!("Altitude: {:.2}°", rad_to_deg(moon.altitude()));
    println!("Distance: {:.0} km", moon.distance);
    println!("Illuminated fraction: {:.3}", illumination.fraction);
    println!("Phase: {:.3}", illumination.phase);
    match moon_times {
        MoonTimes::Crossings { rise, set } => {
            let show = |t: Option<chrono::DateTime<_>>| {
                t.map_or_else(|| "-".to_string(), |t| t.format("%H:%M:%S").to_string())
            };
            println!("Moonrise: {}", show(rise));
            println!("Moonset: {}", show(set));
        }
        MoonTimes::AlwaysUp => println!("Moon is up all day"),
        MoonTimes::AlwaysDown => println!("Moon is down all day"),
    }

    Ok(())
}
