//! Prompt construction for move selection

/// Build the move-selection prompt
///
/// Embeds the FEN and the comma-separated legal moves, and asks for exactly
/// one of them in coordinate notation. `role` is "white"/"black" when the
/// model plays a fixed side.
pub fn build_move_prompt(fen: &str, legal_moves: &[String], role: Option<&str>) -> String {
    let persona = match role {
        Some(role) => format!("You are a professional chess player playing as {role}."),
        None => "You are a professional chess player.".to_string(),
    };

    format!(
        "\n{persona}\n\
         The current board state in FEN is:\n\
         {fen}\n\
         \n\
         These are the legal moves:\n\
         {moves}\n\
         \n\
         Choose ONE move from this list and respond with ONLY the move in UCI format (e.g. e2e4).\n\
         Do not explain anything. Just respond with the move.\n",
        moves = legal_moves.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_with_role() {
        //! Role, FEN and moves all appear in the prompt
        let moves = vec!["e2e4".to_string(), "d2d4".to_string()];
        let prompt = build_move_prompt("some-fen", &moves, Some("black"));
        assert!(prompt.contains("playing as black."));
        assert!(prompt.contains("some-fen"));
        assert!(prompt.contains("e2e4, d2d4"));
        assert!(prompt.contains("ONLY the move in UCI format"));
    }

    #[test]
    fn test_prompt_without_role() {
        //! Suggest mode prompt has no side
        let prompt = build_move_prompt("fen", &[], None);
        assert!(prompt.contains("You are a professional chess player.\n"));
        assert!(!prompt.contains("playing as"));
    }
}
