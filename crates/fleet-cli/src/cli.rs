//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Sort key for fleet listings
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Speed,
    Model,
    Efficiency,
}

#[derive(Parser)]
#[command(name = "fleet-checker")]
#[command(version)]
#[command(about = "Heterogeneous vehicle fleet manager with flat-file persistence")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Fleet file to operate on. Uses config value if not specified.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed the fleet file with the demo fleet
    Demo,

    /// Add a vehicle
    Add {
        /// Vehicle kind (Car, Truck, Bus, Airplane, CargoShip)
        kind: String,

        /// Unique vehicle ID
        id: String,

        /// Model name
        model: String,

        /// Maximum speed in km/h
        #[arg(long)]
        max_speed: f64,

        /// Starting mileage in km
        #[arg(long, default_value_t = 0.0)]
        mileage: f64,

        /// Wheel count (land vehicles)
        #[arg(long)]
        wheels: Option<u32>,

        /// Maximum altitude in meters (airplanes)
        #[arg(long)]
        altitude: Option<f64>,

        /// Whether the ship is sailed (cargo ships)
        #[arg(long)]
        sail: bool,
    },

    /// Remove a vehicle by ID
    Remove { id: String },

    /// List the fleet, optionally sorted
    List {
        #[arg(long, short = 's')]
        sort: Option<SortKey>,
    },

    /// Start a journey of the given distance for every vehicle
    Journey {
        /// Distance in km
        distance: f64,
    },

    /// Refuel every fuel-capable vehicle
    RefuelAll {
        /// Liters to add to each vehicle
        amount: f64,
    },

    /// Total fuel consumption for a distance across the fleet
    Consumption {
        /// Distance in km
        distance: f64,
    },

    /// Perform maintenance on every flagged vehicle
    Maintain,

    /// Flag a vehicle for maintenance
    Schedule { id: String },

    /// List vehicles currently needing maintenance
    MaintenanceDue,

    /// Print the fleet report
    Report,

    /// Search by kind or capability
    Search {
        /// Car, Truck, Bus, Airplane, CargoShip, FuelConsumable,
        /// PassengerCarrier, CargoCarrier, or Maintainable
        selector: String,
    },

    /// Show the fastest and slowest vehicles
    Extremes,

    /// Reorder the stored fleet by fuel efficiency
    SortFleet,

    /// Refuel one vehicle
    Refuel { id: String, amount: f64 },

    /// Board passengers
    Board { id: String, count: u32 },

    /// Disembark passengers
    Disembark { id: String, count: u32 },

    /// Load cargo in kg
    Load { id: String, weight: f64 },

    /// Unload cargo in kg
    Unload { id: String, weight: f64 },

    /// Show or set configuration
    Config {
        /// Show current config
        #[arg(long)]
        show: bool,

        /// Set the default fleet file
        #[arg(long)]
        set_file: Option<PathBuf>,

        /// Set the default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,
    },
}
