pub mod decision_style;
