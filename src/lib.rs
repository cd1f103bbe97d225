/*!
# HR Dashboard

Analytics over Persian employee records, built in Rust.

## Overview

Employee data arrives as an Excel workbook (or is generated for a demo), is
normalized into strictly typed records and then summarized for six dashboard
views: overview, birthdays, salary, regional map, employee profile and
overtime. Dates follow the Persian (Solar Hijri) calendar and all display
numbers use Persian numerals.

## Architecture

The pipeline runs in one direction:

### Input Layer
- **Loader** - Reads the first sheet of an `.xlsx`/`.xls` workbook into rows
  keyed by header (asynchronous whole-file read, synchronous parse)
- **Sample Generator** - Produces synthetic records from fixed vocabularies

### Normalization Layer
- **Column Vocabulary** - Accepted Persian labels and aliases per field
- **Record Normalizer** - Coerces loosely typed cells into `Employee` records,
  filling defaults instead of failing

### Analysis Layer
- **Filter State** - AND across five keys, OR within a key
- **Aggregation Engine** - Fixed and open grouping, averages, scalars and
  drill-down lists
- **Views** - One summary structure per dashboard tab

### Session Layer
- **Application State** - Immutable value replaced on every action
- **Shell** - Interactive prompt hosting one session

## Key Features

- Tolerant parsing: Persian digits, digit separators and numeric prefixes
- Template download that loads back into the same fields
- Export of the filtered dataset as a workbook
- JSON output of every summary
- Reproducible sample data from a seeded RNG

## Modules

- **aggregate**: Grouping, averages and list operations
- **app**: Interactive shell
- **columns**: Column labels, aliases and template examples
- **config**: Reference year and plausibility bounds
- **downloader**: Template and dataset export (XLSX)
- **employee**: The `Employee` record and fixed enumerations
- **error**: Error types and their Persian notices
- **filter**: Filter keys, state and options
- **loader**: Workbook upload
- **normalizer**: Row to record coercion
- **persian**: Persian calendar dates and numerals
- **sample**: Synthetic data generator
- **session**: Application state
- **views**: Per-tab summaries

## Feature Flags

- `xlsx` (default): workbook reading through `calamine` and writing through
  `rust_xlsxwriter`
*/

pub mod aggregate;
pub mod app;
pub mod columns;
pub mod config;
pub mod downloader;
pub mod employee;
pub mod error;
pub mod filter;
pub mod loader;
pub mod normalizer;
pub mod persian;
pub mod sample;
pub mod session;
pub mod views;

pub use config::DashboardConfig;
pub use employee::{Employee, Tab};
pub use error::{ConfigError, ExportError, LoadError};
pub use filter::{FilterKey, FilterOptions, FilterState};
pub use normalizer::{CellValue, Row, normalize_rows};
pub use sample::{generate_sample_data, generate_sample_data_with_rng};
pub use session::{AppState, DataSource, TabSummary, View};
