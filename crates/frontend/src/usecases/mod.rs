pub mod u101_retail_checkout;
