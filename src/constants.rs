/// Number of cards in standard deck
pub const CARD_COUNT: u8 = 52;

/// Number of ranks in a sandard deck
/// (2 -> A)
pub const RANK_COUNT: u8 = 13;

/// Number of suits in a standard deck
pub const SUIT_COUNT: u8 = 4;

/// u8 rank to char table
pub const RANK_TO_CHAR: &[char; 13] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// u8 suit to char table
pub const SUIT_TO_CHAR: &[char; 4] = &['c', 'd', 'h', 's'];

/// Bits reserved per suit inside a `CardSet` mask
pub const SUIT_STRIDE: u8 = 16;

/// Mask covering the 13 rank bits of one suit
pub const RANK_MASK: u16 = 0x1fff;

/// Cards dealt to the board in flop games
pub const BOARD_SIZE: usize = 5;

/// Hole cards in hold'em
pub const HOLDEM_HAND_SIZE: usize = 2;

/// Hole cards in omaha
pub const OMAHA_HAND_SIZE: usize = 4;

/// Cards in a stud or razz hand
pub const STUD_HAND_SIZE: usize = 7;

/// Cards in a draw hand
pub const DRAW_HAND_SIZE: usize = 5;

/// Cards in a badugi hand
pub const BADUGI_HAND_SIZE: usize = 4;

/// Cards in a three card poker hand
pub const THREE_CARD_HAND_SIZE: usize = 3;
