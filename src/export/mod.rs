mod csv_export;

pub(crate) use csv_export::{export_to_path, resolve_export_path, to_csv_string};
