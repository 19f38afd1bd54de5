pub mod confirm_dialog;
pub mod filter_panel;
pub mod form_field;
pub mod generic_table;
pub mod notice;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod svg_chart;
pub mod table;
