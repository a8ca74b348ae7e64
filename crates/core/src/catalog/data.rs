use crate::domain::{MountainId, Region};

use Region::*;

/// 日本百名山 in traditional numbering order:
/// (id, name, elevation m, prefecture, region, difficulty).
pub(super) const HYAKUMEIZAN: [(MountainId, &str, u32, &str, Region, u8); 100] = [
    (1, "利尻山", 1721, "北海道", Hokkaido, 4),
    (2, "羅臼岳", 1661, "北海道", Hokkaido, 3),
    (3, "斜里岳", 1547, "北海道", Hokkaido, 3),
    (4, "阿寒岳", 1499, "北海道", Hokkaido, 2),
    (5, "大雪山", 2291, "北海道", Hokkaido, 3),
    (6, "トムラウシ", 2141, "北海道", Hokkaido, 5),
    (7, "十勝岳", 2077, "北海道", Hokkaido, 3),
    (8, "幌尻岳", 2052, "北海道", Hokkaido, 5),
    (9, "後方羊蹄山", 1898, "北海道", Hokkaido, 3),
    (10, "岩木山", 1625, "青森", Tohoku, 2),
    (11, "八甲田山", 1585, "青森", Tohoku, 2),
    (12, "八幡平", 1613, "岩手・秋田", Tohoku, 1),
    (13, "岩手山", 2038, "岩手", Tohoku, 3),
    (14, "早池峰山", 1917, "岩手", Tohoku, 3),
    (15, "鳥海山", 2236, "山形・秋田", Tohoku, 3),
    (16, "月山", 1984, "山形", Tohoku, 2),
    (17, "朝日岳", 1871, "山形・新潟", Tohoku, 4),
    (18, "蔵王山", 1841, "山形・宮城", Tohoku, 1),
    (19, "飯豊山", 2105, "福島・山形・新潟", Tohoku, 4),
    (20, "吾妻山", 2035, "福島・山形", Tohoku, 2),
    (21, "安達太良山", 1700, "福島", Tohoku, 2),
    (22, "磐梯山", 1816, "福島", Tohoku, 2),
    (23, "会津駒ヶ岳", 2133, "福島", Tohoku, 3),
    (24, "那須岳", 1917, "栃木", Kanto, 2),
    (25, "越後駒ヶ岳", 2003, "新潟", Chubu, 4),
    (26, "平ヶ岳", 2141, "新潟・群馬", Chubu, 4),
    (27, "巻機山", 1967, "新潟・群馬", Chubu, 3),
    (28, "燧ヶ岳", 2356, "福島", Tohoku, 3),
    (29, "至仏山", 2228, "群馬", Kanto, 2),
    (30, "谷川岳", 1977, "群馬・新潟", Kanto, 3),
    (31, "雨飾山", 1963, "新潟・長野", Chubu, 3),
    (32, "苗場山", 2145, "新潟・長野", Chubu, 3),
    (33, "妙高山", 2454, "新潟", Chubu, 3),
    (34, "火打山", 2462, "新潟", Chubu, 3),
    (35, "高妻山", 2353, "長野", Chubu, 4),
    (36, "男体山", 2486, "栃木", Kanto, 3),
    (37, "日光白根山", 2578, "栃木・群馬", Kanto, 2),
    (38, "皇海山", 2144, "栃木・群馬", Kanto, 3),
    (39, "武尊山", 2158, "群馬", Kanto, 3),
    (40, "赤城山", 1828, "群馬", Kanto, 1),
    (41, "草津白根山", 2171, "群馬", Kanto, 1),
    (42, "四阿山", 2354, "長野・群馬", Chubu, 2),
    (43, "浅間山", 2568, "長野・群馬", Chubu, 3),
    (44, "筑波山", 877, "茨城", Kanto, 1),
    (45, "白馬岳", 2932, "長野・富山", Chubu, 4),
    (46, "五竜岳", 2814, "長野・富山", Chubu, 4),
    (47, "鹿島槍ヶ岳", 2889, "長野・富山", Chubu, 4),
    (48, "剱岳", 2999, "富山", Chubu, 5),
    (49, "立山", 3015, "富山", Chubu, 2),
    (50, "薬師岳", 2926, "富山", Chubu, 4),
    (51, "黒部五郎岳", 2840, "富山・岐阜", Chubu, 5),
    (52, "黒岳", 2986, "富山", Chubu, 5),
    (53, "鷲羽岳", 2924, "富山・長野", Chubu, 5),
    (54, "槍ヶ岳", 3180, "長野・岐阜", Chubu, 4),
    (55, "穂高岳", 3190, "長野・岐阜", Chubu, 5),
    (56, "常念岳", 2857, "長野", Chubu, 3),
    (57, "笠ヶ岳", 2898, "岐阜", Chubu, 4),
    (58, "焼岳", 2455, "長野・岐阜", Chubu, 3),
    (59, "乗鞍岳", 3026, "長野・岐阜", Chubu, 1),
    (60, "御嶽山", 3067, "長野・岐阜", Chubu, 3),
    (61, "美ヶ原", 2034, "長野", Chubu, 1),
    (62, "霧ヶ峰", 1925, "長野", Chubu, 1),
    (63, "蓼科山", 2531, "長野", Chubu, 2),
    (64, "八ヶ岳", 2899, "長野・山梨", Chubu, 3),
    (65, "両神山", 1723, "埼玉", Kanto, 3),
    (66, "雲取山", 2017, "東京・埼玉・山梨", Kanto, 3),
    (67, "甲武信ヶ岳", 2475, "山梨・埼玉・長野", Chubu, 3),
    (68, "金峰山", 2599, "山梨・長野", Chubu, 3),
    (69, "瑞牆山", 2230, "山梨", Chubu, 3),
    (70, "大菩薩岳", 2057, "山梨", Chubu, 1),
    (71, "丹沢山", 1567, "神奈川", Kanto, 3),
    (72, "富士山", 3776, "静岡・山梨", Chubu, 4),
    (73, "天城山", 1406, "静岡", Chubu, 2),
    (74, "木曽駒ヶ岳", 2956, "長野", Chubu, 2),
    (75, "空木岳", 2864, "長野", Chubu, 4),
    (76, "恵那山", 2191, "長野・岐阜", Chubu, 3),
    (77, "甲斐駒ヶ岳", 2967, "山梨・長野", Chubu, 4),
    (78, "仙丈ヶ岳", 3033, "山梨・長野", Chubu, 3),
    (79, "鳳凰山", 2841, "山梨", Chubu, 4),
    (80, "北岳", 3193, "山梨", Chubu, 4),
    (81, "間ノ岳", 3190, "山梨・静岡", Chubu, 5),
    (82, "塩見岳", 3052, "長野・静岡", Chubu, 5),
    (83, "悪沢岳", 3141, "静岡", Chubu, 5),
    (84, "赤石岳", 3121, "長野・静岡", Chubu, 5),
    (85, "聖岳", 3013, "長野・静岡", Chubu, 5),
    (86, "光岳", 2591, "長野・静岡", Chubu, 5),
    (87, "白山", 2702, "石川・岐阜", Chubu, 3),
    (88, "荒島岳", 1523, "福井", Chubu, 3),
    (89, "伊吹山", 1377, "滋賀", Kinki, 2),
    (90, "大台ヶ原山", 1695, "奈良・三重", Kinki, 1),
    (91, "大峰山", 1915, "奈良", Kinki, 3),
    (92, "大山", 1729, "鳥取", ChugokuShikoku, 2),
    (93, "剣山", 1955, "徳島", ChugokuShikoku, 1),
    (94, "石鎚山", 1982, "愛媛", ChugokuShikoku, 3),
    (95, "九重山", 1791, "大分", Kyushu, 2),
    (96, "祖母山", 1756, "大分・宮崎", Kyushu, 3),
    (97, "阿蘇山", 1592, "熊本", Kyushu, 2),
    (98, "霧島山", 1700, "宮崎・鹿児島", Kyushu, 2),
    (99, "開聞岳", 924, "鹿児島", Kyushu, 2),
    (100, "宮之浦岳", 1936, "鹿児島", Kyushu, 4),
];
