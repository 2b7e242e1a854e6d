use crate::cards::Card;

/// Hand total: the sum of `rank + 1` over every card.
///
/// There is no bust rule and no cap; suits are ignored.
///
/// # Examples
///
/// ```
/// use cardduel_engine::cards::Card;
/// use cardduel_engine::scoring::total;
///
/// let hand = [Card::new(9, 0), Card::new(0, 3)];
/// assert_eq!(total(&hand), 11);
/// assert_eq!(total(&[]), 0);
/// ```
pub fn total(hand: &[Card]) -> u32 {
    hand.iter().map(Card::face_value).sum()
}
