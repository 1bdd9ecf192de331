pub mod d001_client;
