use spill_core::JournalEntry;

/// Mentor-style prompt asking for deep, personal insight under narrative headings.
pub const CLAUDE_PROMPT: &str = "\
Take a look at my journal entry below. I'd like you to analyze it and respond \
with deep insight that feels personal, not clinical.\n\
Imagine you're not just a friend, but a mentor who truly gets both my tech \
background and my psychological patterns. I want you to uncover the deeper \
meaning and emotional undercurrents behind my scattered thoughts.\n\
Keep it casual, dont say yo, help me make new connections i don't see, comfort, \
validate, challenge, all of it.\n\
Use vivid metaphors and powerful imagery to help me see what I'm really \
building. Organize your thoughts with meaningful headings that create a \
narrative journey through my ideas.\n\
Don't just validate my thoughts - reframe them in a way that shows me what I'm \
really seeking beneath the surface. Go beyond the product concepts to the \
emotional core of what I'm trying to solve.\n\
Be willing to be profound and philosophical without sounding like you're giving \
therapy. I want someone who can see the patterns I can't see myself and \
articulate them in a way that feels like an epiphany.\n\
Start with 'hey, thanks for sharing this with me, let me reflect on what you've \
written...'\n\
\n\
Here's my journal entry:";

/// Append the Claude prompt followed by the entry.
pub fn append_prompt(prompt: &mut String, entry: &JournalEntry) {
    prompt.push_str(CLAUDE_PROMPT);
    prompt.push_str("\n\n");
    prompt.push_str(entry.as_str());
    prompt.push('\n');
}
