use clap::{Parser, Subcommand};
use uf_core::{Quantity, kilogram, kilometer, kiloparsec, parse_unit, second, solar_mass};
use uf_fields::{ArrayCache, ArrayView, ClassDecl, FieldResult, RawValue, UnitRecord, registry};

#[derive(Parser)]
#[command(name = "uf-cli")]
#[command(about = "unitfields CLI - unit conversion and record inspection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert numeric values between equivalent units
    Convert {
        /// Values to convert
        values: Vec<f64>,
        /// Source unit expression (e.g. "km / s")
        #[arg(long)]
        from: String,
        /// Target unit expression
        #[arg(long)]
        to: String,
    },
    /// Show the dimension and SI factor of a unit expression
    Dims {
        /// Unit expression (e.g. "kpc", "kg m^-3")
        unit: String,
    },
    /// Walk through a sample unit-bearing record and its array view
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { values, from, to } => cmd_convert(&values, &from, &to),
        Commands::Dims { unit } => cmd_dims(&unit),
        Commands::Demo => {
            cmd_demo()?;
            Ok(())
        }
    }
}

fn cmd_convert(values: &[f64], from: &str, to: &str) -> Result<(), Box<dyn std::error::Error>> {
    let from_unit = parse_unit(from)?;
    let to_unit = parse_unit(to)?;

    let quantity = Quantity::new(values.to_vec(), from_unit);
    let converted = quantity.to(&to_unit)?;

    println!("{} = {}", quantity, converted);
    Ok(())
}

fn cmd_dims(unit: &str) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = parse_unit(unit)?;
    println!("unit:      {}", parsed);
    println!("dimension: {}", parsed.dimension());
    println!("SI factor: {:e}", parsed.si_factor());
    Ok(())
}

// A small astronomy-flavored record, the library's intended usage shape.

struct Cluster {
    x: Quantity,
    v: Quantity,
    m: Quantity,
    arr: ArrayCache,
}

impl UnitRecord for Cluster {
    fn declare(decl: &mut ClassDecl) {
        decl.field("x", kiloparsec())
            .field("v", kilometer().div(&second()))
            .field("m", solar_mass());
    }

    fn quantity(&self, name: &str) -> Option<&Quantity> {
        match name {
            "x" => Some(&self.x),
            "v" => Some(&self.v),
            "m" => Some(&self.m),
            _ => None,
        }
    }
}

impl Cluster {
    fn new(
        x: impl Into<RawValue>,
        v: impl Into<RawValue>,
        m: impl Into<RawValue>,
    ) -> FieldResult<Self> {
        let class = registry::ensure::<Self>()?;
        Ok(Self {
            x: class.coerce("x", x)?,
            v: class.coerce("v", v)?,
            m: class.coerce("m", m)?,
            arr: ArrayCache::new(),
        })
    }

    fn arr_(&self) -> ArrayView<'_, Self> {
        ArrayView::new(self, &self.arr)
    }
}

fn cmd_demo() -> FieldResult<()> {
    println!("Declaring Cluster: x [kpc], v [km / s], m [Msun]\n");

    // x arrives bare (interpreted as kpc), v arrives bare, m arrives in kg
    let cluster = Cluster::new(
        vec![1.0, 1.0, 3.0, 4.0],
        vec![210.0, 195.0, 220.0, 205.0],
        Quantity::new(vec![2.0e30, 4.0e30, 6.0e30, 8.0e30], kilogram()),
    )?;

    println!("Stored quantities (units preserved as supplied):");
    for (name, unit) in registry::fields_of::<Cluster>() {
        let q = cluster.quantity(name).expect("declared field");
        println!("  {:>2} = {}  (canonical: {})", name, q, unit);
    }

    let view = cluster.arr_();
    println!("\nCanonical projections via arr_:");
    for name in view.names() {
        let values = view.get(name)?;
        println!("  arr_.{} = {:?}", name, &values[..]);
    }

    println!("\nSecond read comes from the per-instance cache:");
    let first = view.get("m")?;
    let again = view.get("m")?;
    println!("  arr_.m cached: {}", std::sync::Arc::ptr_eq(&first, &again));

    Ok(())
}
