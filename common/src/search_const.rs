//! Fixed values shared by the query builder, flattener and exporters.

/// Device adverse-event endpoint of the openFDA API.
pub const DEFAULT_DEVICE_EVENT_URL: &str = "https://api.fda.gov/device/event.json";

/// The provider caps a single page at this many records.
pub const MAX_LIMIT: u32 = 100;

/// Page size used by the "top malfunctions" / "top injuries" shortcuts.
pub const CANNED_QUERY_LIMIT: u32 = 100;

/// Results are always most-recent-first.
pub const SORT_CLAUSE: &str = "date_received:desc";

pub const DATE_RECEIVED_FIELD: &str = "date_received";
pub const EVENT_TYPE_FIELD: &str = "event_type";

pub const EVENT_TYPE_MALFUNCTION: &str = "Malfunction";
pub const EVENT_TYPE_INJURY: &str = "Injury";

/// Premarket notification (510(k)) lookup page; the number is appended.
pub const PMN_LINK_PREFIX: &str = "https://www.accessdata.fda.gov/scripts/cdrh/cfdocs/cfpmn/pmn.cfm?ID=";

pub const FEI_SEPARATOR: &str = "; ";

pub const CSV_EXPORT_FILENAME: &str = "maude_output.csv";
pub const XLSX_EXPORT_FILENAME: &str = "maude_output.xlsx";
