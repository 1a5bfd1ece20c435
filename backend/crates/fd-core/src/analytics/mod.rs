pub mod flow_summary;
