pub mod d400_pl_report;
