//! One operator session: the provider client, the result store and the views over it.

use std::path::Path;

use backend::{
    api::search::{
        aggregate::{count_by, filter_rows},
        import_events_file, search_events,
    },
    config::ProviderConfig,
    error::SearchError,
    export::{ExportFormat, export_rows},
    provider_utils::openfda_utils::{EventSource, OpenFdaClient},
    session_store::SessionStore,
};
use common::{flat_record::FlatRecordField, row_filter::RowFilter, search_request::SearchRequest};

use crate::{
    commands::ViewArgs,
    render::{
        chart::render_pareto,
        links::render_links,
        table::{TABLE_COLUMNS, render_table},
    },
};

const CHART_BAR_WIDTH: usize = 40;

pub struct Session<S: EventSource = OpenFdaClient> {
    config: ProviderConfig,
    source: S,
    store: SessionStore,
    // fetches run to completion one at a time on this thread
    runtime: tokio::runtime::Runtime,
}

impl Session<OpenFdaClient> {
    pub fn new(config: ProviderConfig) -> anyhow::Result<Self> {
        Self::with_source(config, OpenFdaClient::new())
    }
}

impl<S: EventSource> Session<S> {
    pub fn with_source(config: ProviderConfig, source: S) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        Ok(Self { config, source, store: SessionStore::new(), runtime })
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Fetches and stores. On failure the previous results stay in place.
    pub fn search(&mut self, request: SearchRequest) -> Result<String, SearchError> {
        let description = request.describe();
        let count = self.runtime.block_on(search_events(
            &mut self.store,
            &self.source,
            &self.config.device_event_url,
            request,
        ))?;
        Ok(format!("{count} reports stored ({description})\n"))
    }

    pub fn load(&mut self, path: &Path) -> Result<String, SearchError> {
        let count = self.runtime.block_on(import_events_file(&mut self.store, path))?;
        Ok(format!("{count} reports stored (file {})\n", path.display()))
    }

    pub fn table(&self, filters: &[RowFilter], max_rows: usize) -> String {
        let rows = filter_rows(self.store.get(), filters);
        render_table(&rows, &TABLE_COLUMNS, max_rows)
    }

    pub fn links(&self) -> String {
        render_links(self.store.get())
    }

    pub fn chart(&self, by: FlatRecordField, event_type: Option<&str>, filters: &[RowFilter]) -> String {
        let rows: Vec<_> = filter_rows(self.store.get(), filters).into_iter().cloned().collect();
        let event_filter = event_type.map(|value| RowFilter::equals(FlatRecordField::EventType, value));
        render_pareto(&count_by(&rows, by, event_filter.as_ref()), CHART_BAR_WIDTH)
    }

    pub fn export(&self, format: ExportFormat, output: Option<&Path>) -> anyhow::Result<String> {
        let path = export_rows(self.store.get(), format, &self.config.export_dir, output)?;
        Ok(format!("wrote {} rows to {}\n", self.store.get().len(), path.display()))
    }

    pub fn status(&self) -> String {
        match self.store.current() {
            None => "nothing stored yet; run search, top or load\n".to_string(),
            Some(current) => format!(
                "{} reports from {} (stored {})\n",
                current.rows.len(),
                current.source.describe(),
                current.stored_at.format("%Y-%m-%d %H:%M:%S"),
            ),
        }
    }

    /// The view requested on a one-shot command line, plus an optional export.
    pub fn show(&self, view: &ViewArgs) -> anyhow::Result<String> {
        let mut out = if let Some(by) = view.chart_by {
            self.chart(by, view.event_type.as_deref(), &view.filters)
        } else if view.links {
            self.links()
        } else {
            self.table(&view.filters, view.rows)
        };
        if let Some(format) = view.export {
            out.push_str(&self.export(format, view.output.as_deref())?);
        }
        Ok(out)
    }
}
