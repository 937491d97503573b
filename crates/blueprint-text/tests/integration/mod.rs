mod formatter;
mod scenarios;
