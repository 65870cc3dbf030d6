//! Static inputs for the quote generator.

/// Names a generated quote can be attributed to.
pub const AUTHORS: &[&str] = &[
    "Albert Einstein", "Marie Curie", "Leonardo da Vinci", "Maya Angelou", "Stephen King",
    "Steve Jobs", "Eleanor Roosevelt", "Winston Churchill", "Nelson Mandela", "Walt Disney",
    "Confucius", "Oprah Winfrey", "Theodore Roosevelt", "Mahatma Gandhi", "Ralph Waldo Emerson",
    "Abraham Lincoln", "J.K. Rowling", "Buddha", "Coco Chanel", "Benjamin Franklin",
    "Aristotle", "Martin Luther King Jr.", "Helen Keller", "Zig Ziglar", "Vince Lombardi",
    "Wayne Gretzky", "Friedrich Nietzsche", "Bruce Lee", "George Bernard Shaw", "Anne Frank",
    "Dalai Lama", "Jim Rohn", "Napoleon Hill", "Paulo Coelho", "Mother Teresa",
    "Sun Tzu", "Socrates", "Voltaire", "Plato", "Rumi",
    "Harriet Tubman", "Malala Yousafzai", "Bill Gates", "Colin Powell", "Lao Tzu",
    "J.R.R. Tolkien", "Audrey Hepburn", "Pablo Picasso", "Thomas Edison", "Victor Hugo",
    "Seneca", "Marilyn Monroe", "Stephen Covey", "Amelia Earhart", "Robert Frost",
    "Franklin D. Roosevelt", "Virginia Woolf", "Haruki Murakami", "C.S. Lewis", "Henry Ford",
    "Wayne Dyer", "Leo Tolstoy", "George Eliot", "Walt Whitman", "Rene Descartes",
    "Anaïs Nin", "Muhammad Ali", "Pablo Neruda", "Jane Austen", "Malcom X",
    "H. Jackson Brown Jr.", "Dr. Seuss", "Henry David Thoreau", "Booker T. Washington", "Benjamin Disraeli",
    "Albert Camus", "Mark Twain", "Oscar Wilde", "Charles Darwin", "Isaac Newton",
    "Galileo Galilei", "Alan Turing", "Grace Hopper", "Ada Lovelace", "Nikola Tesla",
    "Carl Sagan", "Neil deGrasse Tyson", "Richard Feynman", "Noam Chomsky", "Angela Davis",
];

/// Words and short phrases substituted into templates.
pub const THEMES: &[&str] = &[
    "imagination", "innovation", "empathy", "authenticity", "perseverance", "dreams",
    "courage", "education", "inspiration", "patience", "happiness", "belief",
    "change", "wisdom", "creation", "growth", "resilience", "understanding",
    "curiosity", "learning", "action", "mindset", "purpose", "love",
    "strategy", "knowledge", "truth", "light", "journey", "success",
    "failure", "choices", "focus", "discipline", "goals", "opportunity",
    "creativity", "freedom", "optimism", "present moment", "future", "past",
    "work", "beauty", "strength", "art", "discovery", "fear",
    "blossom", "kindness", "potential", "exploration", "simplicity", "complexity",
    "reality", "vision", "passion", "progress", "peace",
];

/// Sentence shapes; each holds exactly one `{theme1}` and one `{theme2}`.
pub const TEMPLATES: &[&str] = &[
    "Focus on your {theme1} and let your {theme2} guide you.",
    "The secret to {theme1} is continuous {theme2}.",
    "Embrace {theme1} as the pathway to {theme2}.",
    "Discover {theme1} within yourself to achieve {theme2}.",
    "True {theme1} comes from sustained {theme2}.",
    "Without {theme1}, there can be no true {theme2}.",
    "The essence of {theme1} lies in its {theme2}.",
    "Cultivate {theme1} to find your inner {theme2}.",
];
