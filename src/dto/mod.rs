pub mod billing_row;
