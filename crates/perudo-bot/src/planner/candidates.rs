use perudo_core::model::claim::Claim;
use perudo_core::model::face::Face;

/// Quantity steps above the current claim the search explores.
const QUANTITY_SPAN: u32 = 2;

/// All claims the rules allow next, within the bounded search window:
/// quantities from the current one up to two higher, every face, keeping
/// only claims that strictly beat the current one.
pub fn candidate_claims(current: Claim) -> Vec<Claim> {
    let mut candidates = Vec::new();
    for quantity in current.quantity..=current.quantity.saturating_add(QUANTITY_SPAN) {
        for face in Face::ALL {
            let candidate = Claim::new(quantity, face);
            if candidate.beats(current) {
                candidates.push(candidate);
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::candidate_claims;
    use perudo_core::model::claim::Claim;
    use perudo_core::model::face::Face;

    #[test]
    fn every_candidate_beats_the_current_claim() {
        let current = Claim::new(4, Face::Three);
        for candidate in candidate_claims(current) {
            assert!(candidate.beats(current), "{candidate} does not beat {current}");
        }
    }

    #[test]
    fn mid_face_claim_yields_fifteen_candidates() {
        // Same quantity: faces 4..6. Two higher quantities: all six faces.
        let candidates = candidate_claims(Claim::new(4, Face::Three));
        assert_eq!(candidates.len(), 3 + 6 + 6);
    }

    #[test]
    fn top_face_claim_only_raises_quantity() {
        let candidates = candidate_claims(Claim::new(4, Face::Six));
        assert_eq!(candidates.len(), 12);
        assert!(candidates.iter().all(|claim| claim.quantity > 4));
    }

    #[test]
    fn candidates_come_out_in_ascending_order() {
        let candidates = candidate_claims(Claim::new(2, Face::Five));
        for pair in candidates.windows(2) {
            assert!(pair[1].beats(pair[0]));
        }
    }
}
