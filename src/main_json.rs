// Copyright (C) 2020-2026 Andy Kurnia.

use wordgrid::{alphabet, dictionary, error, grid, movegen, return_error};

// rack: string of letters, '?' for a blank.
// board: rows in the board-file format (uppercase letter = tile, lowercase =
// blank played as that letter, premium markers for unplayed cells).
#[derive(serde::Deserialize)]
struct Question {
    rack: String,
    #[serde(rename = "board")]
    board_rows: Vec<String>,
}

fn main() -> error::Returns<()> {
    let mut data = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin(), &mut data)?;
    let question: Question = serde_json::from_str(&data)?;

    let dict = dictionary::Dictionary::from_word_list(&std::fs::read_to_string("words.txt")?)?;
    let alphabet = match std::fs::read_to_string("tiles.txt") {
        Ok(giant_string) => alphabet::Alphabet::from_tile_table(&giant_string)?,
        Err(_) => alphabet::make_english_alphabet(),
    };

    let mut rack = Vec::with_capacity(question.rack.len());
    for c in question.rack.chars() {
        match c {
            'A'..='Z' => rack.push((c as u8) & 0x3f),
            '?' => rack.push(0),
            _ => {
                return_error!(format!("invalid rack tile {:?}", c));
            }
        }
    }

    let board = grid::Grid::parse(&question.board_rows.join("\n"))?;

    let word_search = movegen::WordSearch {
        grid: &board,
        dict: &dict,
        alphabet: &alphabet,
    };
    let mut plays = word_search.gen_plays(&rack);
    plays.sort_unstable_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| (a.down, a.lane, a.idx).cmp(&(b.down, b.lane, b.idx)))
            .then_with(|| a.word.cmp(&b.word))
    });

    let mut result = Vec::<serde_json::Value>::with_capacity(plays.len());
    for play in plays.iter() {
        // word: 1 for A, -1 for blank-as-A
        let word_played = play
            .word
            .iter()
            .map(|&x| {
                if x & 0x80 != 0 {
                    -((x & !0x80) as i8)
                } else {
                    x as i8
                }
            })
            .collect::<Vec<i8>>();
        // across plays: down=false, lane=row, idx=col (0-based).
        // down plays: down=true, lane=col, idx=row (0-based).
        result.push(serde_json::json!({
            "action": "play",
            "down": play.down,
            "lane": play.lane,
            "idx": play.idx,
            "word": word_played,
            "score": play.score }));
    }
    println!("{}", serde_json::to_string_pretty(&serde_json::to_value(result)?)?);

    Ok(())
}
