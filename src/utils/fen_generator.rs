//! Board-to-FEN writer.
//!
//! Emits the four position fields (placement, side, castling, en passant).
//! Clock fields are omitted because the board does not track them; the
//! parser accepts the shortened form.

use crate::game_state::chess_types::*;

pub fn generate_fen(board: &Board) -> String {
    let side_to_move = match board.side_to_move() {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let en_passant = board
        .en_passant_square()
        .map_or_else(|| "-".to_owned(), |sq| sq.to_string());

    format!(
        "{} {} {} {}",
        generate_placement_field(board),
        side_to_move,
        generate_castling_field(board.castling_rights()),
        en_passant
    )
}

fn generate_placement_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, cells) in board.grid().iter().enumerate() {
        let mut empty_count = 0u8;

        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_fen_char(*piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_fen_char(piece: Piece) -> char {
    let ch = piece.kind.code().to_ascii_lowercase();
    match piece.color {
        Color::Light => ch.to_ascii_uppercase(),
        Color::Dark => ch,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = [
        (CASTLE_LIGHT_KINGSIDE, 'K'),
        (CASTLE_LIGHT_QUEENSIDE, 'Q'),
        (CASTLE_DARK_KINGSIDE, 'k'),
        (CASTLE_DARK_QUEENSIDE, 'q'),
    ]
    .into_iter()
    .filter(|(flag, _)| rights & flag != 0)
    .map(|(_, ch)| ch)
    .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn writes_parsed_positions_back_out() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
            "8/8/8/3pP3/8/8/8/4K2k w - d6",
            "4k3/8/8/8/8/8/8/4K3 b Kq -",
        ] {
            let board = parse_fen(fen).expect("fixture FEN should parse");
            assert_eq!(generate_fen(&board), fen);
        }
    }
}
