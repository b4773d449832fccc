pub mod country_table;
pub mod dashboard;
pub mod info_cards;
pub mod region_select;
pub mod trend_chart;
pub mod world_map;
