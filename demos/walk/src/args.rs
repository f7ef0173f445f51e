//! Command-line arguments and their value parsers.

use clap::{Parser, ValueEnum};
use dw_core::Vec2;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapKind {
    Plane,
    Torus,
    Portals,
}

/// Random walks of drunk agents on a plane, a torus, or a plane with portals.
#[derive(Parser, Debug)]
#[command(name = "walk")]
#[command(about = "Simulate random walks of several kinds of drunks on a 2D map", long_about = None)]
pub struct Args {
    /// Map the drunks walk on
    #[arg(short, long, value_enum, default_value = "plane")]
    pub map: MapKind,

    /// Torus size: one value for a square map, or `A,B`
    #[arg(long, value_parser = parse_size, default_value = "10")]
    pub size: Vec2,

    /// Portal as `X,Y:X,Y` (entrance:exit); repeat for more portals
    #[arg(long = "portal", value_parser = parse_portal)]
    pub portals: Vec<(Vec2, Vec2)>,

    /// Match portal entrances within this distance instead of exactly
    #[arg(long)]
    pub portal_tolerance: Option<f64>,

    /// How many four-directions drunks
    #[arg(long, default_value = "1")]
    pub four_directions: usize,

    /// How many north-biased four-directions drunks
    #[arg(long, default_value = "1")]
    pub biased: usize,

    /// How many any-direction drunks
    #[arg(long, default_value = "1")]
    pub any_direction: usize,

    /// How many any-direction-and-length drunks
    #[arg(long, default_value = "1")]
    pub any_length: usize,

    /// Steps every drunk takes
    #[arg(short, long, default_value = "1000")]
    pub steps: u64,

    /// Master seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Log progress every N steps (0 = only at the end)
    #[arg(long, default_value = "0")]
    pub progress_every: u64,

    /// Print drawable path segments per drunk (jumps excluded)
    #[arg(long)]
    pub paths: bool,
}

/// `"7"` → `(7, 7)`, `"10,20"` → `(10, 20)`.
pub fn parse_size(s: &str) -> Result<Vec2, String> {
    let parts = parse_floats(s)?;
    match parts.as_slice() {
        [side]   => Ok(Vec2::new(*side, *side)),
        [a, b]   => Ok(Vec2::new(*a, *b)),
        _        => Err(format!("expected `A` or `A,B`, got `{s}`")),
    }
}

/// `"1,2:30,40"` → entrance `(1, 2)`, exit `(30, 40)`.
pub fn parse_portal(s: &str) -> Result<(Vec2, Vec2), String> {
    let (entrance, exit) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `X,Y:X,Y`, got `{s}`"))?;
    Ok((parse_point(entrance)?, parse_point(exit)?))
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    match parse_floats(s)?.as_slice() {
        [x, y] => Ok(Vec2::new(*x, *y)),
        _      => Err(format!("expected a point `X,Y`, got `{s}`")),
    }
}

fn parse_floats(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .map_err(|e| format!("`{p}` is not a number: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_scalar_is_square() {
        assert_eq!(parse_size("7").unwrap(), Vec2::new(7.0, 7.0));
        assert_eq!(parse_size("10, 20").unwrap(), Vec2::new(10.0, 20.0));
        assert!(parse_size("1,2,3").is_err());
        assert!(parse_size("wide").is_err());
    }

    #[test]
    fn portal_entrance_and_exit() {
        let (e, x) = parse_portal("1,2:-30,40.5").unwrap();
        assert_eq!(e, Vec2::new(1.0, 2.0));
        assert_eq!(x, Vec2::new(-30.0, 40.5));
        assert!(parse_portal("1,2").is_err());
        assert!(parse_portal("1:2,3").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn repeated_portals_collect() {
        let args = Args::try_parse_from([
            "walk", "--map", "portals", "--portal", "0,1:5,5", "--portal", "2,2:-5,-5",
        ])
        .unwrap();
        assert_eq!(args.map, MapKind::Portals);
        assert_eq!(args.portals.len(), 2);
        assert_eq!(args.size, Vec2::new(10.0, 10.0));
    }
}
