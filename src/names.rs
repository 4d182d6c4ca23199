/// Curated Vietnamese display names, one per chapter, sorted by chapter
/// number.
pub const VIETNAMESE_SURAH_NAMES: &[(u32, &str)] = &[
    (1, "Al-Fātiḥah — Lời Mở Đầu"),
    (2, "Al-Baqarah — Con Bò Cái"),
    (3, "Āl ʿImrān — Gia Đình Imran"),
    (4, "An-Nisāʾ — Phụ Nữ"),
    (5, "Al-Mā'idah — Bàn Tiệc"),
    (6, "Al-An'ām — Đàn Gia Súc"),
    (7, "Al-A'rāf — Thành Trì Cao"),
    (8, "Al-Anfāl — Chiến Lợi Phẩm"),
    (9, "At-Tawbah — Sám Hối"),
    (10, "Yūnus — Ngôn Sứ Yunus"),
    (11, "Hūd — Ngôn Sứ Hud"),
    (12, "Yūsuf — Ngôn Sứ Yusuf"),
    (13, "Ar-Ra'd — Sấm Sét"),
    (14, "Ibrāhīm — Ngôn Sứ Ibrahim"),
    (15, "Al-Ḥijr — Vùng Đá"),
    (16, "An-Naḥl — Đàn Ong"),
    (17, "Al-Isrāʾ — Hành Trình Ban Đêm"),
    (18, "Al-Kahf — Hang Động"),
    (19, "Maryam — Maryam"),
    (20, "Ṭā Hā — Tā Hā"),
    (21, "Al-Anbiyāʾ — Các Ngôn Sứ"),
    (22, "Al-Ḥajj — Hành Hương"),
    (23, "Al-Mu'minūn — Những Người Có Đức Tin"),
    (24, "An-Nūr — Ánh Sáng"),
    (25, "Al-Furqān — Tiêu Chuẩn"),
    (26, "Ash-Shu'arāʼ — Các Thi Sĩ"),
    (27, "An-Naml — Kiến"),
    (28, "Al-Qaṣaṣ — Những Câu Chuyện"),
    (29, "Al-ʿAnkabūt — Nhện"),
    (30, "Ar-Rūm — Người La Mã"),
    (31, "Luqmān — Luqman"),
    (32, "As-Sajdah — Sự Sụp Lạy"),
    (33, "Al-Aḥzāb — Các Đồng Minh"),
    (34, "Sabaʼ — Saba"),
    (35, "Fāṭir — Đấng Kiến Tạo"),
    (36, "Yā Sīn — Yā Sīn"),
    (37, "As-Ṣāffāt — Các Hàng Ngũ"),
    (38, "Ṣād — Ṣād"),
    (39, "Az-Zumar — Đoàn Đoàn"),
    (40, "Ghāfir — Đấng Tha Thứ"),
    (41, "Fuṣṣilat — Những Lời Giải Thích"),
    (42, "Ash-Shūrā — Hội Đồng"),
    (43, "Az-Zukhruf — Trang Sức Vàng"),
    (44, "Ad-Dukhān — Khói"),
    (45, "Al-Jāthiyah — Quỳ Gối"),
    (46, "Al-Aḥqāf — Cồn Cát"),
    (47, "Muḥammad — Muhammad"),
    (48, "Al-Fatḥ — Chiến Thắng"),
    (49, "Al-Ḥujurāt — Những Phòng Riêng"),
    (50, "Qāf — Qāf"),
    (51, "Adh-Dhāriyāt — Những Cơn Gió Cuốn"),
    (52, "Aṭ-Ṭūr — Núi Sinai"),
    (53, "An-Najm — Ngôi Sao"),
    (54, "Al-Qamar — Mặt Trăng"),
    (55, "Ar-Raḥmān — Đấng Rất Mực Khoan Dung"),
    (56, "Al-Wāqi'ah — Biến Cố"),
    (57, "Al-Ḥadīd — Sắt"),
    (58, "Al-Mujādilah — Người Nữ Tranh Luận"),
    (59, "Al-Ḥashr — Sự Di Tản"),
    (60, "Al-Mumtaḥanah — Người Bị Thử Thách"),
    (61, "Aṣ-Ṣaff — Hàng Ngũ"),
    (62, "Al-Jumu'ah — Buổi Cầu Nguyện Thứ Sáu"),
    (63, "Al-Munāfiqūn — Những Kẻ Đạo Đức Giả"),
    (64, "At-Taghābun — Sự Gian Lận"),
    (65, "Aṭ-Ṭalāq — Ly Dị"),
    (66, "At-Taḥrīm — Sự Cấm Đoán"),
    (67, "Al-Mulk — Vương Quyền"),
    (68, "Al-Qalam — Cây Bút"),
    (69, "Al-Ḥāqqah — Sự Chắc Chắn"),
    (70, "Al-Ma'ārij — Những Cấp Bậc"),
    (71, "Nūḥ — Ngôn Sứ Nuh"),
    (72, "Al-Jinn — Các Jinn"),
    (73, "Al-Muzzammil — Người Trùm Áo"),
    (74, "Al-Muddaththir — Người Choàng Áo"),
    (75, "Al-Qiyāmah — Ngày Phục Sinh"),
    (76, "Al-Insān — Con Người"),
    (77, "Al-Mursalāt — Những Sứ Giả"),
    (78, "An-Nabaʼ — Tin Tức Lớn"),
    (79, "An-Nāzi'āt — Những Người Giật Ra"),
    (80, "ʿAbasa — Người Cau Mày"),
    (81, "At-Takwīr — Cuộn Lại"),
    (82, "Al-Infiṭār — Tách Đôi"),
    (83, "Al-Muṭaffifīn — Những Kẻ Gian Lận Cân Đo"),
    (84, "Al-Inshiqāq — Nứt Ra"),
    (85, "Al-Burūj — Chòm Sao"),
    (86, "Aṭ-Ṭāriq — Sao Băng"),
    (87, "Al-A'lā — Đấng Tối Cao"),
    (88, "Al-Ghāshiyah — Sự Bao Trùm"),
    (89, "Al-Fajr — Bình Minh"),
    (90, "Al-Balad — Thành Phố"),
    (91, "Ash-Shams — Mặt Trời"),
    (92, "Al-Layl — Đêm"),
    (93, "Aḍ-Ḍuḥā — Ánh Ban Mai"),
    (94, "Ash-Sharḥ — Sự Mở Rộng"),
    (95, "At-Tīn — Quả Vả"),
    (96, "Al-ʿAlaq — Phôi Thai"),
    (97, "Al-Qadr — Đêm Định Mệnh"),
    (98, "Al-Bayyinah — Bằng Chứng Rõ Ràng"),
    (99, "Az-Zalzalah — Động Đất"),
    (100, "Al-ʿĀdiyāt — Những Chiến Mã"),
    (101, "Al-Qāri'ah — Thảm Họa"),
    (102, "At-Takāthur — Sự Đua Tranh"),
    (103, "Al-ʿAṣr — Buổi Chiều"),
    (104, "Al-Humazah — Kẻ Chỉ Trích"),
    (105, "Al-Fīl — Con Voi"),
    (106, "Quraysh — Bộ Tộc Quraysh"),
    (107, "Al-Mā'ūn — Đồ Dùng Cần Thiết"),
    (108, "Al-Kawthar — Sự Dồi Dào"),
    (109, "Al-Kāfirūn — Những Kẻ Không Tin"),
    (110, "An-Naṣr — Sự Chi Viện"),
    (111, "Al-Masad — Dây Thừng Bện"),
    (112, "Al-Ikhlāṣ — Sự Thuần Khiết"),
    (113, "Al-Falaq — Rạng Đông"),
    (114, "An-Nās — Loài Người"),
];

/// Looks up the curated Vietnamese name for a chapter number.
pub fn vietnamese_name(number: u32) -> Option<&'static str> {
    VIETNAMESE_SURAH_NAMES
        .binary_search_by_key(&number, |(n, _)| *n)
        .ok()
        .map(|idx| VIETNAMESE_SURAH_NAMES[idx].1)
}
