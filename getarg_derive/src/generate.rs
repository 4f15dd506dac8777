mod field;
mod table;
