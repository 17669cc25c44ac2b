pub mod sql_gateway;
