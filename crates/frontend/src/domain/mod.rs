pub mod a001_customer;
pub mod a002_address;
pub mod a003_attribute;
pub mod a004_product;
pub mod a005_discount;
pub mod a006_voucher;
pub mod a007_order;
pub mod a008_return_request;
