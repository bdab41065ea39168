//! Default seed data used when no durable file exists

use quotes_types::Quote;

fn quote(id: u32, author: &str, text: &str, category: &str) -> Quote {
	Quote {
		id: id.to_string(),
		author: author.to_string(),
		text: text.to_string(),
		category: category.to_string(),
		submitted_at: None,
		user_submitted: false,
	}
}

/// The fixed seed list of 20 quotes.
pub fn default_quotes() -> Vec<Quote> {
	vec![
		quote(1, "Linus Torvalds", "Talk is cheap. Show me the code.", "tech"),
		quote(
			2,
			"Steve Jobs",
			"Innovation distinguishes between a leader and a follower.",
			"inspiration",
		),
		quote(
			3,
			"Bill Gates",
			"Measuring programming progress by lines of code is like measuring aircraft building progress by weight.",
			"funny",
		),
		quote(
			4,
			"Grace Hopper",
			"The most dangerous phrase in the language is, 'We've always done it this way.'",
			"inspiration",
		),
		quote(
			5,
			"Donald Knuth",
			"Premature optimization is the root of all evil.",
			"tech",
		),
		quote(
			6,
			"Martin Fowler",
			"Any fool can write code that a computer can understand. Good programmers write code that humans can understand.",
			"tech",
		),
		quote(
			7,
			"Anonymous",
			"There are only 10 types of people in the world: those who understand binary and those who don't.",
			"funny",
		),
		quote(
			8,
			"Edsger Dijkstra",
			"Simplicity is prerequisite for reliability.",
			"tech",
		),
		quote(
			9,
			"Kent Beck",
			"I'm not a great programmer; I'm just a good programmer with great habits.",
			"inspiration",
		),
		quote(
			10,
			"Anonymous",
			"99 little bugs in the code, 99 little bugs. Take one down, patch it around, 117 little bugs in the code.",
			"debugging",
		),
		quote(
			11,
			"Robert C. Martin",
			"Clean code always looks like it was written by someone who cares.",
			"tech",
		),
		quote(
			12,
			"Anonymous",
			"Programming is like sex: one mistake and you have to support it for the rest of your life.",
			"funny",
		),
		quote(
			13,
			"Alan Kay",
			"The best way to predict the future is to invent it.",
			"inspiration",
		),
		quote(
			14,
			"Anonymous",
			"A user interface is like a joke. If you have to explain it, it's not that good.",
			"tech",
		),
		quote(15, "Jeff Atwood", "The best code is no code at all.", "productivity"),
		quote(
			16,
			"Anonymous",
			"Debugging is twice as hard as writing the code in the first place.",
			"debugging",
		),
		quote(
			17,
			"Larry Wall",
			"The three chief virtues of a programmer are: Laziness, Impatience and Hubris.",
			"funny",
		),
		quote(18, "Anonymous", "Code never lies, comments sometimes do.", "tech"),
		quote(
			19,
			"John Johnson",
			"First, solve the problem. Then, write the code.",
			"productivity",
		),
		quote(20, "Anonymous", "It works on my machine.", "debugging"),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn seed_has_twenty_quotes_with_unique_ids() {
		let quotes = default_quotes();
		assert_eq!(quotes.len(), 20);

		let mut ids: Vec<_> = quotes.iter().map(|q| q.id.clone()).collect();
		ids.sort();
		ids.dedup();
		assert_eq!(ids.len(), 20);
	}

	#[test]
	fn seed_quotes_are_not_user_submitted() {
		assert!(default_quotes()
			.iter()
			.all(|q| !q.user_submitted && q.submitted_at.is_none()));
	}
}
