//! Static value tables behind the mock accessors.

pub const BOOLEAN: [bool; 24] = [
    true, true, true, false, false, true, false, false, false, false, true, true, true, false,
    false, false, true, false, false, false, true, false, false, true,
];

pub const ROLE: [&str; 24] = [
    "UX Designer",
    "Full Stack Designer",
    "Backend Developer",
    "UX Designer",
    "UX Designer",
    "UI Designer",
    "UI/UX Designer",
    "UI/UX Designer",
    "Front End Developer",
    "Backend Developer",
    "Full Stack Developer",
    "Backend Developer",
    "UX Designer",
    "UI Designer",
    "Project Manager",
    "UI Designer",
    "UI Designer",
    "Leader",
    "Front End Developer",
    "UI/UX Designer",
    "Project Manager",
    "UI/UX Designer",
    "UI Designer",
    "Full Stack Designer",
];

pub const FIRST_NAME: [&str; 24] = [
    "Mossie", "David", "Ebba", "Chester", "Eula", "Jaren", "Emmie", "Sally", "Lera", "Velma",
    "Mckenzie", "Otho", "Nannie", "Ludie", "Emmett", "Mara", "Alvina", "Tatum", "Clement", "Nico",
    "Deja", "Orlo", "Patsy", "Lilyan",
];

pub const LAST_NAME: [&str; 24] = [
    "Carroll", "Simonis", "Yundt", "Hahn", "Bechtelar", "Bergnaum", "Baumbach", "Schaden",
    "Pouros", "Hagenes", "Renner", "Okuneva", "Kilback", "Wisoky", "Murazik", "Dickinson",
    "Grimes", "Lueilwitz", "Keebler", "Graham", "Huels", "Gulgowski", "Durgan", "Blanda",
];

pub const FULL_NAME: [&str; 24] = [
    "Mossie Carroll",
    "David Simonis",
    "Ebba Yundt",
    "Chester Hahn",
    "Eula Bechtelar",
    "Jaren Bergnaum",
    "Emmie Baumbach",
    "Sally Schaden",
    "Lera Pouros",
    "Velma Hagenes",
    "Mckenzie Renner",
    "Otho Okuneva",
    "Nannie Kilback",
    "Ludie Wisoky",
    "Emmett Murazik",
    "Mara Dickinson",
    "Alvina Grimes",
    "Tatum Lueilwitz",
    "Clement Keebler",
    "Nico Graham",
    "Deja Huels",
    "Orlo Gulgowski",
    "Patsy Durgan",
    "Lilyan Blanda",
];

pub const TITLE: [&str; 24] = [
    "Apply These 7 Secret Techniques To Improve Event",
    "Believing These 7 Myths About Event Keeps You From Growing",
    "Don't Waste Time! 7 Facts Until You Reach Your Event",
    "How 5 Stories Will Change The Way You Approach Event",
    "Get Rid of Event Problems Once And For All",
    "The Secret Of Successful Event",
    "Why Most People Will Never Be Great At Event",
    "Event Explained In Fewer Than 140 Characters",
    "Little Known Ways To Rid Yourself Of Event",
    "Event Is Your Worst Enemy. 5 Ways To Defeat It",
    "The Ultimate Guide To Event",
    "Ten Things You Should Know About Event",
    "Why You Really Need A Dashboard Review",
    "How To Turn Your Event From Zero To Hero",
    "Seven Rules About Event Meant To Be Broken",
    "Event Shortcuts - The Easy Way",
    "Learn Exactly How We Made Event Last Month",
    "The Anatomy Of A Great Event",
    "What Everyone Must Know About Event",
    "Event: This Is What Professionals Do",
    "All About Event",
    "Event Doesn't Have To Be Hard. Read These 5 Tips",
    "Ways To Revolutionize Your Event",
    "How To Make Your Event Look Amazing In 5 Days",
];

pub const SENTENCE: [&str; 24] = [
    "Assumenda nam repudiandae rerum fugiat vel maxime.",
    "Quis veniam aut saepe aliquid nulla.",
    "Reprehenderit ut voluptas sapiente ratione nostrum est.",
    "Error ut sit vel molestias velit.",
    "Quo quia sit nihil nemo doloremque et.",
    "Autem doloribus harum vero laborum.",
    "Tempora officiis consequuntur architecto nostrum autem nam adipisci.",
    "Voluptas sunt magni adipisci praesentium saepe.",
    "Ea architecto quas voluptates voluptas earum illo est vel rem.",
    "Ipsum expedita reiciendis ut.",
    "Architecto vel voluptatibus alias a aut non maxime ipsa voluptates.",
    "Reiciendis enim officiis cupiditate eaque distinctio laudantium modi similique consequatur.",
    "Ab autem consequatur itaque mollitia ipsum cupiditate error repudiandae nobis.",
    "Distinctio quo vel fugiat consequatur.",
    "Vitae aut ea est similique tempore.",
    "Suscipit omnis qui necessitatibus voluptatem.",
    "Eos quia vel nulla incidunt ut.",
    "Quidem voluptatum sit est tempore fuga.",
    "Porro et in voluptatem id.",
    "Ut nihil consequatur explicabo aspernatur.",
    "Debitis numquam similique.",
    "Natus est ipsam illo in inventore.",
    "Quaerat sunt aut est quod.",
    "Repellendus earum qui quis.",
];

pub const DESCRIPTION: [&str; 24] = [
    "Occaecati est et illo quibusdam accusamus qui. Incidunt aut et molestiae ut facere aut. Est quidem iusto praesentium excepturi harum nihil tenetur facilis. Ut omnis voluptates nihil accusantium doloribus eaque debitis.",
    "Atque eaque ducimus minima distinctio velit. Laborum et veniam officiis. Delectus ex saepe hic id laboriosam officia. Odit nostrum qui illum saepe debitis ullam. Laudantium beatae modi fugit ut. Dolores consequatur beatae nihil voluptates rem maiores.",
    "Rerum eius velit dolores. Explicabo ad nemo quibusdam. Voluptatem eum suscipit et ipsum et consequatur aperiam quia. Rerum nulla sequi recusandae illum velit quia quas. Et error laborum maiores cupiditate occaecati.",
    "Et non omnis qui. Qui sunt deserunt dolorem aut velit cumque adipisci aut enim. Nihil quis quisquam nesciunt dicta nobis ab aperiam dolorem repellat. Voluptates non blanditiis. Error et tenetur iste soluta cupiditate ratione perspiciatis et.",
    "Nihil ea sunt facilis praesentium atque. Ab animi alias sequi molestias aut velit ea. Sed possimus eos. Et est aliquid est voluptatem.",
    "Non rerum modi. Accusamus voluptatem odit nihil in. Quidem et iusto numquam veniam culpa aperiam odio aut enim. Quae vel dolores. Pariatur est culpa veritatis aut dolorem.",
    "Est enim et sit non impedit aperiam cumque animi. Aut eius impedit saepe blanditiis. Totam molestias magnam minima fugiat.",
    "Unde a inventore et. Sed esse ut. Atque ducimus quibusdam fuga quas id qui fuga.",
    "Eaque natus adipisci soluta nostrum dolorem. Nesciunt ipsum molestias ut aliquid natus ut omnis qui fugiat. Dolor et rem. Ut neque voluptatem blanditiis quasi ullam deleniti.",
    "Nam et error exercitationem qui voluptate optio. Officia omnis qui accusantium ipsam qui. Quia sequi nulla perspiciatis optio vero omnis maxime omnis ipsum. Perspiciatis consequuntur asperiores veniam dolores.",
    "Perspiciatis nulla ut ut ut voluptates totam consectetur eligendi qui. Optio ut cum. Dolorum sapiente qui laborum. Impedit temporibus totam delectus nihil. Voluptatem corrupti rem.",
    "Distinctio omnis similique omnis eos. Repellat cumque rerum nisi. Reiciendis soluta non ut veniam temporibus. Accusantium et dolorem voluptas harum.",
    "Est officiis placeat id et iusto ut fugit numquam. Eos aut sit rerum. Quisquam aut ratione at nihil velit ut. Tenetur eos libero.",
    "Aliquid aut sint ducimus temporibus qui eius. Aut quaerat commodi quisquam. Voluptate illum magni ut aut molestias.",
    "Similique consequatur eligendi atque. Vero nihil unde sed necessitatibus vitae voluptatem. Dolor vitae doloremque.",
    "Est quis eveniet voluptas. Iure ea non. Quam itaque et consequatur voluptatem officia.",
    "Repellat dolor sequi corrupti. Ea sed quis. Et eligendi vel dolor veritatis.",
    "Voluptatibus libero quo sed. Odit earum ipsam ut tempore consequuntur.",
    "Sint quasi quia tempora rem. Voluptas quas mollitia consequuntur.",
    "Aut numquam ut. Ipsam laboriosam maxime dolores.",
    "Dolorum dignissimos nemo. Ut perferendis enim id.",
    "Quia sint quibusdam. Et voluptatem quia inventore.",
    "Quo iste id corporis. Sunt eveniet in consequatur.",
    "Rerum harum eos similique. Asperiores consequatur odio.",
];

pub const PERCENT: [f64; 24] = [
    10.1, 13.6, 28.2, 42.1, 37.2, 18.5, 40.1, 94.8, 91.4, 53.0, 25.4, 62.9, 86.6, 62.4, 35.4, 17.6,
    52.0, 6.8, 95.0, 22.1, 24.6, 59.3, 88.5, 47.4,
];

pub const RATING: [f64; 24] = [
    2.5, 2.0, 4.9, 2.0, 4.0, 5.0, 4.9, 5.0, 3.7, 2.5, 2.0, 4.9, 4.8, 4.0, 2.0, 3.7, 1.4, 2.4, 1.8,
    5.0, 2.9, 3.9, 3.9, 1.8,
];

pub const AGE: [u32; 24] = [
    30, 26, 59, 47, 29, 46, 18, 56, 39, 19, 45, 18, 46, 56, 38, 41, 44, 48, 32, 45, 42, 60, 33, 57,
];

pub const PRICE: [f64; 24] = [
    16.19, 35.71, 34.3, 93.1, 55.47, 89.09, 44.39, 26.92, 45.35, 26.96, 78.22, 35.54, 90.69, 63.61,
    67.55, 94.75, 75.78, 39.6, 52.84, 72.8, 83.08, 85.02, 69.22, 60.96,
];
