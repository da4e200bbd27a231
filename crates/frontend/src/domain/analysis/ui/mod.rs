mod report;
mod upload_form;
mod view;

pub use view::AnalysisView;
