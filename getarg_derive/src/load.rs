mod attribute;
mod field;
mod table;

const ATTRIBUTE: &str = "getarg";
