pub mod dynamodb;
pub mod parser_adapter;
pub mod parsers;
pub mod s3_adapter;
pub mod sqs;
